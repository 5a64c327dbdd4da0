// crates/countries-core/src/error.rs

//! # Errors
//!
//! One error type for the whole crate. Every failure is expected to end up in
//! front of the user (see [`crate::render::failure_message`]), so the
//! `Display` strings are written to be shown as-is.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountryError {
    /// The server answered with a status outside `200..=299`.
    #[error("{context} ({status})")]
    Network { context: String, status: u16 },

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// 2xx response whose body is not JSON.
    #[error("{context}: malformed JSON body ({source})")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that does not carry the data we need.
    #[error("Response did not contain a valid {expected}: {reason}")]
    MissingData { expected: String, reason: String },

    #[error("No neighbour found for {country}!")]
    NoNeighbour { country: String },

    #[error("No requests were given")]
    NoRequests,

    #[error("All {attempts} requests failed; last error: {last}")]
    AllFailed {
        attempts: usize,
        last: Box<CountryError>,
    },

    #[error("Request took too long! (gave up after {}s)", .after.as_secs_f64())]
    Timeout { after: Duration },

    #[error("Invalid coordinates: {lat},{lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl CountryError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CountryError::Network { status, .. } => Some(*status),
            CountryError::AllFailed { last, .. } => last.status(),
            _ => None,
        }
    }

    pub(crate) fn missing<T: ?Sized>(reason: impl Into<String>) -> Self {
        CountryError::MissingData {
            expected: short_type_name::<T>(),
            reason: reason.into(),
        }
    }
}

/// `alloc::vec::Vec<countries_core::model::CountryRecord>` -> `Vec<CountryRecord>`
fn short_type_name<T: ?Sized>() -> String {
    std::any::type_name::<T>()
        .split_inclusive(|c: char| matches!(c, '<' | '>' | ',' | ' ' | '&' | '[' | ']' | '(' | ')'))
        .map(|part| part.rsplit("::").next().unwrap_or(part))
        .collect()
}

pub type Result<T> = std::result::Result<T, CountryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_mentions_context_and_status() {
        let err = CountryError::Network {
            context: "Country not found".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Country not found (404)");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn missing_uses_short_type_name() {
        struct Location;
        let err = CountryError::missing::<Location>("missing field `city`");
        match err {
            CountryError::MissingData { expected, .. } => assert_eq!(expected, "Location"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn generic_type_names_are_shortened_too() {
        assert_eq!(
            short_type_name::<Vec<crate::model::CountryRecord>>(),
            "Vec<CountryRecord>"
        );
        assert_eq!(short_type_name::<(u8, String)>(), "(u8, String)");
    }

    #[test]
    fn all_failed_exposes_last_status() {
        let err = CountryError::AllFailed {
            attempts: 2,
            last: Box::new(CountryError::Network {
                context: "Country not found".into(),
                status: 404,
            }),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("All 2 requests failed"));
    }

    #[test]
    fn timeout_reports_seconds() {
        let err = CountryError::Timeout {
            after: Duration::from_millis(1500),
        };
        assert_eq!(err.to_string(), "Request took too long! (gave up after 1.5s)");
    }
}
