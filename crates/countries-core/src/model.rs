// crates/countries-core/src/model.rs

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One country as returned by REST Countries v3.1 (`/name/{name}`,
/// `/alpha/{code}`).
///
/// Only the fields we display or navigate by are modelled. The record is
/// read-only and lives for one render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    pub population: u64,
    /// language code -> language name, in response order.
    #[serde(default)]
    pub languages: OrderedMap<String>,
    /// currency code -> currency, in response order.
    #[serde(default)]
    pub currencies: OrderedMap<Currency>,
    pub flags: Flags,
    /// Alpha-3 codes of bordering countries. Absent for islands.
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub cca3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    pub svg: String,
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl CountryRecord {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// First language as listed in the response.
    pub fn first_language(&self) -> Option<&str> {
        self.languages.first().map(|(_, name)| name.as_str())
    }

    /// First currency as listed in the response.
    pub fn first_currency(&self) -> Option<&Currency> {
        self.currencies.first().map(|(_, currency)| currency)
    }

    pub fn first_border(&self) -> Option<&str> {
        self.borders.first().map(String::as_str)
    }

    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Population in millions, one decimal: `146_000_000` -> `"146.0"`.
    pub fn population_millions(&self) -> String {
        format_millions(self.population)
    }
}

/// Rounds half up to one decimal: `1_250_000` -> `"1.3"`.
pub fn format_millions(population: u64) -> String {
    let tenths = population.saturating_add(50_000) / 100_000;
    format!("{}.{}", tenths / 10, tenths % 10)
}

// -----------------------------------------------------------------------------
// ORDERED MAP
// -----------------------------------------------------------------------------

/// A JSON object kept as `(key, value)` pairs in document order.
///
/// REST Countries returns `languages` and `currencies` as objects and the
/// display shows "the first one", so the order of the body matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn first(&self) -> Option<(&String, &V)> {
        self.0.first().map(|(k, v)| (k, v))
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// Goes through `serde_json::Map`, which keeps document order with the
// `preserve_order` feature.
impl<'de, V: DeserializeOwned> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer)?
            .into_iter()
            .map(|(k, v)| serde_json::from_value(v).map(|v| (k, v)))
            .collect::<Result<Self, _>>()
            .map_err(D::Error::custom)
    }
}
