// crates/countries-core/src/board.rs

//! # Country Board
//!
//! Owns one [`CountriesClient`] and one [`Surface`] and is the single place
//! where failures become user-visible: every `show_*` method renders either
//! the country card(s) or a failure line, and still hands the error back so
//! the caller can log it or pick an exit code.

use crate::client::CountriesClient;
use crate::error::{CountryError, Result};
use crate::geocode::Coordinates;
use crate::model::CountryRecord;
use crate::render::{self, Surface, NEIGHBOUR_VARIANT};
use crate::transport::Transport;

pub struct CountryBoard<T, S> {
    client: CountriesClient<T>,
    surface: S,
}

impl<T: Transport, S: Surface> CountryBoard<T, S> {
    pub fn new(client: CountriesClient<T>, surface: S) -> Self {
        Self { client, surface }
    }

    pub fn client(&self) -> &CountriesClient<T> {
        &self.client
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub async fn show_country(&mut self, name: &str) -> Result<CountryRecord> {
        let outcome = self.client.country(name).await;
        self.show(outcome, None)
    }

    pub async fn show_country_by_code(&mut self, code: &str) -> Result<CountryRecord> {
        let outcome = self.client.country_by_code(code).await;
        self.show(outcome, None)
    }

    /// Country first, then its first neighbour with the `neighbour` variant.
    /// The first card stays even if the neighbour lookup fails.
    pub async fn show_country_and_neighbour(
        &mut self,
        name: &str,
    ) -> Result<(CountryRecord, CountryRecord)> {
        let country = self.show_country(name).await?;
        let outcome = self.client.neighbour(&country).await;
        let neighbour = self.show(outcome, Some(NEIGHBOUR_VARIANT))?;
        Ok((country, neighbour))
    }

    /// Renders the country at `coords` and returns `You are in {city}, {country}`.
    pub async fn show_where_am_i(&mut self, coords: Coordinates) -> Result<String> {
        match self.client.where_am_i(coords).await {
            Ok((location, country)) => {
                self.show(Ok(country), None)?;
                Ok(location.describe())
            }
            Err(err) => Err(self.show_failure(err)),
        }
    }

    /// All or nothing: either every card is rendered in input order, or a
    /// single failure line.
    pub async fn show_countries<N: AsRef<str>>(
        &mut self,
        names: &[N],
    ) -> Result<Vec<CountryRecord>> {
        match self.client.countries(names).await {
            Ok(records) => {
                for record in &records {
                    self.render(record, None)?;
                }
                Ok(records)
            }
            Err(err) => Err(self.show_failure(err)),
        }
    }

    /// One card or one failure line per name, in input order.
    pub async fn show_settled<N: AsRef<str>>(
        &mut self,
        names: &[N],
    ) -> Vec<Result<CountryRecord>> {
        let outcomes = self.client.countries_settled(names).await;
        outcomes
            .into_iter()
            .map(|outcome| self.show(outcome, None))
            .collect()
    }

    pub async fn show_first_settled<N: AsRef<str>>(
        &mut self,
        names: &[N],
    ) -> Result<CountryRecord> {
        let outcome = self.client.first_settled(names).await;
        self.show(outcome, None)
    }

    pub async fn show_first_success<N: AsRef<str>>(
        &mut self,
        names: &[N],
    ) -> Result<CountryRecord> {
        let outcome = self.client.first_success(names).await;
        self.show(outcome, None)
    }

    /// Renders the standard failure line and gives the error back.
    pub fn show_failure(&mut self, err: CountryError) -> CountryError {
        tracing::error!("{err}");
        render::render_failure(&mut self.surface, &err);
        err
    }

    fn show(
        &mut self,
        outcome: Result<CountryRecord>,
        variant: Option<&str>,
    ) -> Result<CountryRecord> {
        match outcome {
            Ok(record) => {
                self.render(&record, variant)?;
                Ok(record)
            }
            Err(err) => Err(self.show_failure(err)),
        }
    }

    fn render(&mut self, record: &CountryRecord, variant: Option<&str>) -> Result<()> {
        render::render_country(&mut self.surface, record, variant)
            .map_err(|err| self.show_failure(err))
    }
}
