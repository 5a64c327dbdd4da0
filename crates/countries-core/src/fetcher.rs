// crates/countries-core/src/fetcher.rs

//! # Fetcher
//!
//! One GET, one status check, one JSON parse. Failures come back as
//! [`CountryError`]; nothing is retried and no timeout is applied here.

use crate::error::{CountryError, Result};
use crate::transport::Transport;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Fetcher<T> {
    transport: T,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GETs `url` and parses the body as JSON.
    ///
    /// - status outside `200..=299` -> [`CountryError::Network`] carrying
    ///   `error_context` and the status; the body is discarded.
    /// - unparsable body -> [`CountryError::Parse`].
    pub async fn fetch_json(&self, url: &str, error_context: &str) -> Result<Value> {
        tracing::debug!(%url, "GET");
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            tracing::warn!(%url, status = response.status, "request rejected");
            return Err(CountryError::Network {
                context: error_context.to_owned(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| {
            tracing::warn!(%url, error = %source, "response body is not JSON");
            CountryError::Parse {
                context: error_context.to_owned(),
                source,
            }
        })
    }

    /// [`fetch_json`](Self::fetch_json), then converts the value into `U`.
    ///
    /// Valid JSON of the wrong shape is reported as
    /// [`CountryError::MissingData`] naming `U`.
    pub async fn fetch_json_as<U: DeserializeOwned>(
        &self,
        url: &str,
        error_context: &str,
    ) -> Result<U> {
        let value = self.fetch_json(url, error_context).await?;
        serde_json::from_value(value).map_err(|e| CountryError::missing::<U>(e.to_string()))
    }
}
