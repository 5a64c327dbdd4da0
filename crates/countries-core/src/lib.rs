// crates/countries-core/src/lib.rs

//! # countries-core
//!
//! Fetches country data from [REST Countries](https://restcountries.com) and
//! reverse-geocodes coordinates with [geocode.xyz](https://geocode.xyz), then
//! renders each country as a small HTML card.
//!
//! Layers, bottom-up:
//! - [`transport`]: one async GET (`reqwest` natively, browser `fetch` in
//!   `countries-wasm`, an in-memory map in tests)
//! - [`fetcher`]: status validation + JSON parsing
//! - [`client`]: typed endpoints and the multi-request helpers
//! - [`render`]: country card / error line onto a [`Surface`]
//! - [`board`]: client + surface, turns failures into visible messages
//!
//! ```no_run
//! use countries_core::prelude::*;
//!
//! # async fn run() -> countries_core::Result<()> {
//! let mut board = CountryBoard::new(CountriesClient::from_env(), HtmlContainer::new());
//! board.show_country_and_neighbour("portugal").await?;
//! println!("{}", board.surface().to_html()?);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod board;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod geocode;
pub mod model;
pub mod prelude;
pub mod render;
pub mod transport;

// Re-exports
pub use crate::error::{CountryError, Result};
pub use board::CountryBoard;
pub use client::{within, CountriesClient};
pub use config::ApiConfig;
pub use fetcher::Fetcher;
pub use geocode::{Coordinates, Location};
pub use model::{CountryRecord, Currency};
pub use render::{HtmlContainer, Surface};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpResponse, Transport};
