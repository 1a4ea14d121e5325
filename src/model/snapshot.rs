use serde::{Deserialize, Serialize};

use super::country::{Army, City, Country, Regime};
use super::geography::Province;
use super::modifier::{Event, NationalSpirit};

/// One country and everything hanging off it, fetched once per request.
/// Derivations only read it.
///
/// To-one relations are `Option`, never lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySnapshot {
    pub country: Country,
    #[serde(default)]
    pub regime: Option<Regime>,
    #[serde(default)]
    pub army: Option<Army>,
    #[serde(default)]
    pub provinces: Vec<Province>,
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub national_spirits: Vec<NationalSpirit>,
}

impl CountrySnapshot {
    /// A snapshot with no relations loaded.
    pub fn bare(country: Country) -> Self {
        Self {
            country,
            regime: None,
            army: None,
            provinces: Vec::new(),
            cities: Vec::new(),
            events: Vec::new(),
            national_spirits: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_json() {
        let snapshot = CountrySnapshot::from_json(
            r#"{"country": {"id": "c1", "name": "Aldmark", "population": 5000}}"#,
        )
        .unwrap();
        assert_eq!(snapshot.country.population, 5000);
        assert_eq!(snapshot.country.treasury, 0);
        assert!(snapshot.regime.is_none());
        assert!(snapshot.provinces.is_empty());
    }

    #[test]
    fn to_one_relation_must_not_be_a_list() {
        let result = CountrySnapshot::from_json(
            r#"{"country": {"id": "c1", "name": "Aldmark"},
                "regime": [{"id": "r1", "name": "Monarchy"}]}"#,
        );
        assert!(result.is_err());
    }
}
