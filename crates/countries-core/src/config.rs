// crates/countries-core/src/config.rs

//! Endpoint configuration. Defaults point at the public services; both base
//! URLs can be overridden from the environment or explicitly (the CLI does
//! the latter from its flags).

pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_GEOCODE_URL: &str = "https://geocode.xyz";

pub const COUNTRIES_URL_ENV: &str = "COUNTRIES_API_URL";
pub const GEOCODE_URL_ENV: &str = "GEOCODE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base of the REST Countries API, without trailing slash.
    pub countries_url: String,
    /// Base of the reverse-geocoding API, without trailing slash.
    pub geocode_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            countries_url: DEFAULT_COUNTRIES_URL.to_owned(),
            geocode_url: DEFAULT_GEOCODE_URL.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Defaults, overridden by `COUNTRIES_API_URL` / `GEOCODE_API_URL` when set
    /// and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(COUNTRIES_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_countries_url(url);
        }
        if let Some(url) = lookup(GEOCODE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_geocode_url(url);
        }
        config
    }

    pub fn with_countries_url(mut self, url: impl AsRef<str>) -> Self {
        self.countries_url = normalize(url.as_ref());
        self
    }

    pub fn with_geocode_url(mut self, url: impl AsRef<str>) -> Self {
        self.geocode_url = normalize(url.as_ref());
        self
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_public_services() {
        let config = ApiConfig::default();
        assert_eq!(config.countries_url, "https://restcountries.com/v3.1");
        assert_eq!(config.geocode_url, "https://geocode.xyz");
    }

    #[test]
    fn overrides_strip_trailing_slashes() {
        let config = ApiConfig::default().with_countries_url("http://localhost:8080/v3.1/");
        assert_eq!(config.countries_url, "http://localhost:8080/v3.1");
    }

    #[test]
    fn env_lookup_ignores_blank_values() {
        let env: HashMap<&str, &str> =
            HashMap::from([(COUNTRIES_URL_ENV, "  "), (GEOCODE_URL_ENV, "http://geo.test/")]);
        let config = ApiConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.countries_url, DEFAULT_COUNTRIES_URL);
        assert_eq!(config.geocode_url, "http://geo.test");
    }
}
