// crates/countries-core/src/client.rs

//! # Countries Client
//!
//! Typed endpoint calls on top of the [`Fetcher`], plus the multi-request
//! helpers. Every request is one GET; concurrent requests are polled inside
//! the caller's task (no spawning), so they interleave exactly like promises
//! on an event loop and finish in whatever order the network decides.

use crate::config::ApiConfig;
use crate::error::{CountryError, Result};
use crate::fetcher::Fetcher;
use crate::geocode::{Coordinates, Location};
use crate::model::CountryRecord;
use crate::transport::Transport;
use futures::future::{self, Either};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

pub const COUNTRY_NOT_FOUND: &str = "Country not found";
pub const GEOCODING_PROBLEM: &str = "Problem with geocoding";

#[derive(Debug, Clone)]
pub struct CountriesClient<T> {
    fetcher: Fetcher<T>,
    config: ApiConfig,
}

#[cfg(feature = "http")]
impl CountriesClient<crate::transport::ReqwestTransport> {
    /// reqwest transport, endpoints from [`ApiConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(crate::transport::ReqwestTransport::new(), ApiConfig::from_env())
    }
}

impl<T: Transport> CountriesClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            fetcher: Fetcher::new(transport),
            config,
        }
    }

    pub fn fetcher(&self) -> &Fetcher<T> {
        &self.fetcher
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // URLS
    // -------------------------------------------------------------------------

    pub fn name_url(&self, name: &str) -> String {
        format!(
            "{}/name/{}",
            self.config.countries_url,
            urlencoding::encode(name.trim())
        )
    }

    pub fn alpha_url(&self, code: &str) -> String {
        format!(
            "{}/alpha/{}",
            self.config.countries_url,
            urlencoding::encode(code.trim())
        )
    }

    pub fn geocode_url(&self, coords: Coordinates) -> String {
        format!("{}/{}?geoit=json", self.config.geocode_url, coords)
    }

    // -------------------------------------------------------------------------
    // SINGLE REQUESTS
    // -------------------------------------------------------------------------

    /// `/name/{name}`; the API answers with a list, the first entry wins.
    pub async fn country(&self, name: &str) -> Result<CountryRecord> {
        let records: Vec<CountryRecord> = self
            .fetcher
            .fetch_json_as(&self.name_url(name), COUNTRY_NOT_FOUND)
            .await?;
        first_record(records)
    }

    /// `/alpha/{code}` (cca2, cca3 or ccn3).
    pub async fn country_by_code(&self, code: &str) -> Result<CountryRecord> {
        let records: Vec<CountryRecord> = self
            .fetcher
            .fetch_json_as(&self.alpha_url(code), COUNTRY_NOT_FOUND)
            .await?;
        first_record(records)
    }

    /// The country behind the first entry of `record.borders`.
    pub async fn neighbour(&self, record: &CountryRecord) -> Result<CountryRecord> {
        let code = record
            .first_border()
            .ok_or_else(|| CountryError::NoNeighbour {
                country: record.common_name().to_owned(),
            })?;
        self.country_by_code(code).await
    }

    pub async fn reverse_geocode(&self, coords: Coordinates) -> Result<Location> {
        self.fetcher
            .fetch_json_as(&self.geocode_url(coords), GEOCODING_PROBLEM)
            .await
    }

    /// Reverse geocode, then look the resulting country up by name.
    pub async fn where_am_i(&self, coords: Coordinates) -> Result<(Location, CountryRecord)> {
        let location = self.reverse_geocode(coords).await?;
        tracing::info!("{}", location.describe());
        let country = self.country(&location.country).await?;
        Ok((location, country))
    }

    // -------------------------------------------------------------------------
    // MULTIPLE REQUESTS
    // -------------------------------------------------------------------------

    /// All countries, in input order. Fails with the first error to occur
    /// and drops the remaining requests.
    pub async fn countries<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<CountryRecord>> {
        future::try_join_all(names.iter().map(|name| self.country(name.as_ref()))).await
    }

    /// Every outcome, in input order. One failure does not affect the others.
    pub async fn countries_settled<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Vec<Result<CountryRecord>> {
        future::join_all(names.iter().map(|name| self.country(name.as_ref()))).await
    }

    /// Whichever request finishes first, successful or not.
    pub async fn first_settled<S: AsRef<str>>(&self, names: &[S]) -> Result<CountryRecord> {
        if names.is_empty() {
            return Err(CountryError::NoRequests);
        }
        let requests = names.iter().map(|name| Box::pin(self.country(name.as_ref())));
        let (outcome, index, _pending) = future::select_all(requests).await;
        tracing::debug!(winner = names[index].as_ref(), "first request settled");
        outcome
    }

    /// The first request to succeed; failures are skipped until none are left.
    pub async fn first_success<S: AsRef<str>>(&self, names: &[S]) -> Result<CountryRecord> {
        if names.is_empty() {
            return Err(CountryError::NoRequests);
        }
        let requests = names.iter().map(|name| Box::pin(self.country(name.as_ref())));
        match future::select_ok(requests).await {
            Ok((record, _pending)) => Ok(record),
            Err(last) => Err(CountryError::AllFailed {
                attempts: names.len(),
                last: Box::new(last),
            }),
        }
    }
}

/// Races `request` against `deadline`. The deadline future comes from the
/// caller's runtime (`tokio::time::sleep`, a browser timer, ...); `after` is
/// only used for the error.
pub async fn within<R, F, D>(request: F, deadline: D, after: Duration) -> Result<R>
where
    F: Future<Output = Result<R>>,
    D: Future<Output = ()>,
{
    let request = pin!(request);
    let deadline = pin!(deadline);
    match future::select(request, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            tracing::warn!(?after, "request timed out");
            Err(CountryError::Timeout { after })
        }
    }
}

fn first_record(records: Vec<CountryRecord>) -> Result<CountryRecord> {
    records
        .into_iter()
        .next()
        .ok_or_else(|| CountryError::missing::<CountryRecord>("the API returned an empty list"))
}
