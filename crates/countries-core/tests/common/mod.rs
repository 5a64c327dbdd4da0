#![allow(dead_code)]

use countries_core::config::{DEFAULT_COUNTRIES_URL, DEFAULT_GEOCODE_URL};
use countries_core::{HttpResponse, Result, Transport};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

struct Route {
    status: u16,
    body: Vec<u8>,
    delay: Duration,
}

/// In-memory transport: known URLs answer with their canned response, every
/// other URL gets the REST Countries 404 body.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, Route>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.delayed(url, status, body, Duration::ZERO)
    }

    pub fn delayed(
        mut self,
        url: impl Into<String>,
        status: u16,
        body: impl Into<Vec<u8>>,
        delay: Duration,
    ) -> Self {
        self.routes.insert(
            url.into(),
            Route {
                status,
                body: body.into(),
                delay,
            },
        );
        self
    }

    /// Serves `record` (wrapped in a list, like the real API) at `/name/{name}`
    /// and, when it has a `cca3`, at `/alpha/{cca3}`.
    pub fn country(self, name: &str, record: Value) -> Self {
        self.country_after(name, record, Duration::ZERO)
    }

    pub fn country_after(self, name: &str, record: Value, delay: Duration) -> Self {
        let code = record["cca3"].as_str().map(str::to_owned);
        let body = Value::Array(vec![record]).to_string();
        let mut mock = self.delayed(name_url(name), 200, body.clone(), delay);
        if let Some(code) = code {
            mock = mock.delayed(alpha_url(&code), 200, body, delay);
        }
        mock
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_owned());
        match self.routes.get(url) {
            Some(route) => {
                if !route.delay.is_zero() {
                    tokio::time::sleep(route.delay).await;
                }
                Ok(HttpResponse::new(route.status, route.body.clone()))
            }
            None => Ok(HttpResponse::new(
                404,
                r#"{"status":404,"message":"Not Found"}"#,
            )),
        }
    }
}

pub fn name_url(name: &str) -> String {
    format!("{DEFAULT_COUNTRIES_URL}/name/{name}")
}

pub fn alpha_url(code: &str) -> String {
    format!("{DEFAULT_COUNTRIES_URL}/alpha/{code}")
}

pub fn geocode_url(coords: &str) -> String {
    format!("{DEFAULT_GEOCODE_URL}/{coords}?geoit=json")
}

// -----------------------------------------------------------------------------
// FIXTURES (trimmed REST Countries v3.1 records)
// -----------------------------------------------------------------------------

fn record(
    common: &str,
    region: &str,
    population: u64,
    languages: Value,
    currencies: Value,
    borders: &[&str],
    cca3: &str,
) -> Value {
    let mut value = json!({
        "name": { "common": common, "official": format!("Republic of {common}") },
        "region": region,
        "capital": [format!("{common} City")],
        "population": population,
        "languages": languages,
        "currencies": currencies,
        "flags": {
            "png": format!("https://flagcdn.com/w320/{}.png", cca3.to_lowercase()),
            "svg": format!("https://flagcdn.com/{}.svg", cca3.to_lowercase())
        },
        "cca3": cca3
    });
    if !borders.is_empty() {
        value["borders"] = json!(borders);
    }
    value
}

pub fn finland() -> Value {
    record(
        "Finland",
        "Europe",
        5_530_719,
        json!({ "fin": "Finnish", "swe": "Swedish" }),
        json!({ "EUR": { "name": "Euro", "symbol": "€" } }),
        &["NOR", "SWE", "RUS"],
        "FIN",
    )
}

pub fn norway() -> Value {
    record(
        "Norway",
        "Europe",
        5_379_475,
        json!({ "nno": "Norwegian Nynorsk", "nob": "Norwegian Bokmål", "smi": "Sami" }),
        json!({ "NOK": { "name": "Norwegian krone", "symbol": "kr" } }),
        &["FIN", "SWE", "RUS"],
        "NOR",
    )
}

pub fn russia() -> Value {
    record(
        "Russia",
        "Europe",
        146_000_000,
        json!({ "rus": "Russian" }),
        json!({ "RUB": { "name": "Russian ruble", "symbol": "₽" } }),
        &["FIN", "NOR"],
        "RUS",
    )
}

pub fn iceland() -> Value {
    record(
        "Iceland",
        "Europe",
        366_425,
        json!({ "isl": "Icelandic" }),
        json!({ "ISK": { "name": "Icelandic króna", "symbol": "kr" } }),
        &[],
        "ISL",
    )
}

pub fn germany() -> Value {
    record(
        "Germany",
        "Europe",
        83_240_525,
        json!({ "deu": "German" }),
        json!({ "EUR": { "name": "Euro", "symbol": "€" } }),
        &["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"],
        "DEU",
    )
}

pub fn tanzania() -> Value {
    record(
        "Tanzania",
        "Africa",
        59_734_213,
        json!({ "eng": "English", "swa": "Swahili" }),
        json!({ "TZS": { "name": "Tanzanian shilling", "symbol": "Sh" } }),
        &["BDI", "COD", "KEN", "MWI", "MOZ", "RWA", "UGA", "ZMB"],
        "TZA",
    )
}

pub fn berlin() -> Value {
    json!({
        "city": "Berlin",
        "country": "Germany",
        "prov": "DE",
        "latt": "52.50800",
        "longt": "13.38100"
    })
}
