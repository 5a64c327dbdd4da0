// crates/countries-core/src/prelude.rs
pub use crate::board::CountryBoard;
pub use crate::client::{within, CountriesClient};
pub use crate::config::ApiConfig;
pub use crate::error::{CountryError, Result};
pub use crate::geocode::{Coordinates, Location};
pub use crate::model::CountryRecord;
pub use crate::render::{render_country, render_error, render_failure, HtmlContainer, Surface};
#[cfg(feature = "http")]
pub use crate::transport::ReqwestTransport;
pub use crate::transport::{HttpResponse, Transport};
