// crates/countries-core/src/geocode.rs

use crate::error::{CountryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated latitude/longitude pair.
///
/// `Display` produces the `lat,lng` form used in the geocode.xyz path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(CountryError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Reverse-geocoding answer. geocode.xyz returns much more; only the two
/// fields we chain on are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub prov: Option<String>,
}

impl Location {
    /// `You are in Berlin, Germany`
    pub fn describe(&self) -> String {
        format!("You are in {}, {}", self.city, self.country)
    }
}
