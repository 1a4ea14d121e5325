use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub treasury: i64,
    /// 0.0–1.0. `None` when never set by an administrator.
    #[serde(default)]
    pub stability_base: Option<f64>,
    /// 0.0–1.0. `None` when never set by an administrator.
    #[serde(default)]
    pub fatigue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regime {
    pub id: String,
    pub name: String,
    /// Fraction of the population that can be mobilized.
    #[serde(default)]
    pub base_manpower_rate: f64,
}

/// Standing forces of a country. A country with no army row is treated as
/// `Army::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Army {
    pub infantry: u64,
    pub archers: u64,
    pub cavalry: u64,
    pub artillery: u64,
    pub fleet: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub is_capital: bool,
    #[serde(default)]
    pub is_port: bool,
    #[serde(default)]
    pub is_walled: bool,
    #[serde(default)]
    pub has_citadel: bool,
    #[serde(default)]
    pub has_marketplace: bool,
    #[serde(default)]
    pub has_religious_center: bool,
    #[serde(default)]
    pub has_shanty: bool,
}
