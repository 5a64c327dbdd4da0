// crates/countries-core/src/render.rs

//! # Renderer
//!
//! Turns a [`CountryRecord`] into the fixed country card and appends it to a
//! [`Surface`]. Errors are appended as plain text. Nothing is ever cleared:
//! every call adds one node and makes the surface visible.

use crate::error::{CountryError, Result};
use crate::model::CountryRecord;
use askama::Template;

/// Shown when a record lists no language or no currency.
pub const PLACEHOLDER: &str = "Unknown";

/// CSS variant used for the neighbour card.
pub const NEIGHBOUR_VARIANT: &str = "neighbour";

/// Where rendered output goes: an in-memory buffer, a DOM element, ...
///
/// Implementations must not fail; a surface that can error internally (the
/// DOM) logs and carries on.
pub trait Surface {
    /// Appends trusted, already-escaped markup.
    fn append_html(&mut self, html: &str);
    /// Appends untrusted text; the surface is responsible for escaping it.
    fn append_text(&mut self, text: &str);
    /// Makes the container visible (opacity 0 -> 1).
    fn reveal(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn append_html(&mut self, html: &str) {
        (**self).append_html(html)
    }

    fn append_text(&mut self, text: &str) {
        (**self).append_text(text)
    }

    fn reveal(&mut self) {
        (**self).reveal()
    }
}

#[derive(Template)]
#[template(path = "country.html")]
struct CountryCard<'a> {
    variant: &'a str,
    flag: &'a str,
    name: &'a str,
    region: &'a str,
    population: String,
    language: &'a str,
    currency: &'a str,
}

#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
struct TextNode<'a> {
    text: &'a str,
}

/// Builds the country card markup without touching any surface.
pub fn country_fragment(record: &CountryRecord, variant: Option<&str>) -> Result<String> {
    let card = CountryCard {
        variant: variant.unwrap_or_default(),
        flag: &record.flags.svg,
        name: record.common_name(),
        region: &record.region,
        population: record.population_millions(),
        language: record.first_language().unwrap_or(PLACEHOLDER),
        currency: record
            .first_currency()
            .map(|c| c.name.as_str())
            .unwrap_or(PLACEHOLDER),
    };
    Ok(card.render()?)
}

pub fn render_country<S: Surface + ?Sized>(
    surface: &mut S,
    record: &CountryRecord,
    variant: Option<&str>,
) -> Result<()> {
    let html = country_fragment(record, variant)?;
    surface.append_html(&html);
    surface.reveal();
    Ok(())
}

pub fn render_error<S: Surface + ?Sized>(surface: &mut S, message: &str) {
    surface.append_text(message);
    surface.reveal();
}

/// The user-facing sentence for any failure.
pub fn failure_message(err: &CountryError) -> String {
    format!("Something went wrong 💥 {err}. Try again!")
}

pub fn render_failure<S: Surface + ?Sized>(surface: &mut S, err: &CountryError) {
    render_error(surface, &failure_message(err));
}

// -----------------------------------------------------------------------------
// IN-MEMORY CONTAINER
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Html(String),
    Text(String),
}

/// Owned stand-in for the `.countries` element: an append-only list of nodes
/// and a visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlContainer {
    nodes: Vec<Node>,
    visible: bool,
}

impl HtmlContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Plain-text nodes only, unescaped.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text(t) => Some(t.as_str()),
            Node::Html(_) => None,
        })
    }

    /// Serialises the container contents; text nodes are escaped.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Html(html) => out.push_str(html),
                Node::Text(text) => out.push_str(&TextNode { text: text.as_str() }.render()?),
            }
        }
        Ok(out)
    }
}

impl Surface for HtmlContainer {
    fn append_html(&mut self, html: &str) {
        self.nodes.push(Node::Html(html.to_owned()));
    }

    fn append_text(&mut self, text: &str) {
        self.nodes.push(Node::Text(text.to_owned()));
    }

    fn reveal(&mut self) {
        self.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CountryName, Currency, Flags};

    fn record(name: &str, population: u64) -> CountryRecord {
        CountryRecord {
            name: CountryName {
                common: name.to_owned(),
                official: None,
            },
            region: "Europe".to_owned(),
            subregion: None,
            capital: vec![],
            population,
            languages: [("rus", "Russian".to_owned())].into_iter().collect(),
            currencies: [(
                "RUB",
                Currency {
                    name: "Russian ruble".to_owned(),
                    symbol: Some("₽".to_owned()),
                },
            )]
            .into_iter()
            .collect(),
            flags: Flags {
                svg: "flag.svg".to_owned(),
                png: None,
                alt: None,
            },
            borders: vec![],
            cca2: None,
            cca3: None,
        }
    }

    #[test]
    fn card_contains_every_field() {
        let html = country_fragment(&record("Russia", 146_000_000), None).unwrap();
        assert!(html.contains(r#"<article class="country">"#), "{html}");
        assert!(html.contains("flag.svg"));
        assert!(html.contains(r#"<h3 class="country__name">Russia</h3>"#));
        assert!(html.contains(r#"<h4 class="country__region">Europe</h4>"#));
        assert!(html.contains("146.0M people"));
        assert!(html.contains("Russian</p>"));
        assert!(html.contains("Russian ruble</p>"));
    }

    #[test]
    fn variant_is_added_as_class() {
        let html = country_fragment(&record("Russia", 1), Some(NEIGHBOUR_VARIANT)).unwrap();
        assert!(html.contains(r#"<article class="country neighbour">"#), "{html}");
    }

    #[test]
    fn empty_listings_render_placeholder() {
        let mut r = record("Antarctica", 1000);
        r.languages = Default::default();
        r.currencies = Default::default();
        let html = country_fragment(&r, None).unwrap();
        assert_eq!(html.matches(PLACEHOLDER).count(), 2, "{html}");
    }

    #[test]
    fn interpolated_values_are_escaped() {
        let html = country_fragment(&record("<script>x</script>", 1), None).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn appends_without_overwriting() {
        let mut container = HtmlContainer::new();
        assert!(!container.is_visible());

        render_country(&mut container, &record("Russia", 146_000_000), None).unwrap();
        render_country(&mut container, &record("Finland", 5_530_719), None).unwrap();

        assert_eq!(container.len(), 2);
        assert!(container.is_visible());
        let html = container.to_html().unwrap();
        assert!(html.find("Russia").unwrap() < html.find("Finland").unwrap());
        assert!(html.contains("146.0M people"));
        assert!(html.contains("5.5M people"));
    }

    #[test]
    fn error_always_reveals() {
        for message in ["", "plain", "<b>not markup</b>", "💥💥💥"] {
            let mut container = HtmlContainer::new();
            render_error(&mut container, message);
            assert!(container.is_visible());
            assert_eq!(container.texts().collect::<Vec<_>>(), [message]);
        }
    }

    #[test]
    fn text_nodes_are_escaped_on_output() {
        let mut container = HtmlContainer::new();
        render_error(&mut container, "<b>not markup</b>");
        let html = container.to_html().unwrap();
        assert!(html.starts_with("&lt;b&gt;"), "{html}");
    }

    #[test]
    fn failure_message_wraps_error() {
        let err = CountryError::Network {
            context: "Country not found".into(),
            status: 404,
        };
        assert_eq!(
            failure_message(&err),
            "Something went wrong 💥 Country not found (404). Try again!"
        );
    }
}
