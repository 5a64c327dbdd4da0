//! countries-wasm — WebAssembly bindings for countries-core
//!
//! This crate runs the countries-core client in the browser: requests go
//! through `window.fetch`, cards are inserted into a DOM element picked by CSS
//! selector, and the element's opacity is switched to 1 once something was
//! added.
//!
//! What it provides
//! ----------------
//! - Automatic panic hook installation on module load
//! - `showCountry(selector, name)` -> the country record
//! - `showCountryAndNeighbour(selector, name)` -> `[country, neighbour]`
//! - `showCountries(selector, ["tanzania", "russia", ...])` -> records
//! - `whereAmI(selector, lat, lng)` -> `"You are in Berlin, Germany"`
//! - `renderError(selector, message)`
//!
//! Every failing call has already appended its error line to the container
//! when the returned promise rejects.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { showCountryAndNeighbour, whereAmI } from 'countries-wasm';
//!
//! async function main() {
//!   await init();
//!   document.querySelector('.btn-country').addEventListener('click', async () => {
//!     try {
//!       console.log(await whereAmI('.countries', 52.508, 13.381));
//!     } catch (err) {
//!       console.error(`${err} 💥`);
//!     }
//!   });
//!   await showCountryAndNeighbour('.countries', 'portugal');
//! }
//! main();
//! ```
use countries_core::{
    ApiConfig, Coordinates, CountriesClient, CountryBoard, CountryError, HttpResponse, Surface,
    Transport,
};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, Request, RequestInit, RequestMode, Response};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"countries-wasm ready".into());
}

/* --------------------------------------------------------------------------
   DOM Container
-------------------------------------------------------------------------- */

/// A [`Surface`] backed by a live DOM element.
pub struct DomContainer {
    element: HtmlElement,
}

impl DomContainer {
    /// First element matching `selector` in the current document.
    pub fn query(selector: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let element = document
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("no element matches {selector}")))?;
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("{selector} is not an HTML element")))?;
        Ok(Self::from_element(element))
    }

    pub fn from_element(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

// DOM calls can throw; a surface must not, so failures only reach the console.
fn log_dom_error(action: &str, err: &JsValue) {
    web_sys::console::error_2(&format!("countries-wasm: {action} failed").into(), err);
}

impl Surface for DomContainer {
    fn append_html(&mut self, html: &str) {
        if let Err(err) = self.element.insert_adjacent_html("beforeend", html) {
            log_dom_error("insertAdjacentHTML", &err);
        }
    }

    fn append_text(&mut self, text: &str) {
        if let Err(err) = self.element.insert_adjacent_text("beforeend", text) {
            log_dom_error("insertAdjacentText", &err);
        }
    }

    fn reveal(&mut self) {
        if let Err(err) = self.element.style().set_property("opacity", "1") {
            log_dom_error("style.opacity", &err);
        }
    }
}

/* --------------------------------------------------------------------------
   Fetch Transport
-------------------------------------------------------------------------- */

/// [`Transport`] over `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> countries_core::Result<HttpResponse> {
        fetch(url).await.map_err(|err| CountryError::Transport {
            url: url.to_owned(),
            message: describe(&err),
        })
    }
}

async fn fetch(url: &str) -> Result<HttpResponse, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let buffer = JsFuture::from(response.array_buffer()?).await?;
    let body = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(HttpResponse::new(response.status(), body))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/* --------------------------------------------------------------------------
   Exports
-------------------------------------------------------------------------- */

type WebBoard = CountryBoard<FetchTransport, DomContainer>;

fn board(selector: &str) -> Result<WebBoard, JsValue> {
    let container = DomContainer::query(selector)?;
    let client = CountriesClient::new(FetchTransport, ApiConfig::default());
    Ok(CountryBoard::new(client, container))
}

fn to_js(err: CountryError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

#[wasm_bindgen(js_name = showCountry)]
pub async fn show_country(selector: String, name: String) -> Result<JsValue, JsValue> {
    let mut board = board(&selector)?;
    let record = board.show_country(&name).await.map_err(to_js)?;
    Ok(to_value(&record)?)
}

#[wasm_bindgen(js_name = showCountryAndNeighbour)]
pub async fn show_country_and_neighbour(
    selector: String,
    name: String,
) -> Result<JsValue, JsValue> {
    let mut board = board(&selector)?;
    let pair = board
        .show_country_and_neighbour(&name)
        .await
        .map_err(to_js)?;
    Ok(to_value(&[pair.0, pair.1])?)
}

/// `names` is a JS array of strings. Fails as a whole if any lookup fails.
#[wasm_bindgen(js_name = showCountries)]
pub async fn show_countries(selector: String, names: JsValue) -> Result<JsValue, JsValue> {
    let names: Vec<String> = from_value(names)?;
    let mut board = board(&selector)?;
    let records = board.show_countries(&names).await.map_err(to_js)?;
    Ok(to_value(&records)?)
}

#[wasm_bindgen(js_name = whereAmI)]
pub async fn where_am_i(selector: String, lat: f64, lng: f64) -> Result<String, JsValue> {
    let mut board = board(&selector)?;
    let coords = Coordinates::new(lat, lng).map_err(|err| to_js(board.show_failure(err)))?;
    board.show_where_am_i(coords).await.map_err(to_js)
}

#[wasm_bindgen(js_name = renderError)]
pub fn render_error(selector: &str, message: &str) -> Result<(), JsValue> {
    let mut container = DomContainer::query(selector)?;
    countries_core::render::render_error(&mut container, message);
    Ok(())
}
