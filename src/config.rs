use serde::{Deserialize, Serialize};

/// Tunables for the derivations. Hosts usually embed this in their own
/// config file; every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Population above which administrative efficiency starts to drop.
    /// Zero is treated as one.
    pub population_threshold: u64,
    /// Inhabitants per unit of base income. Zero is treated as one.
    pub income_divisor: u64,
    /// Stability shown when a country has none recorded (0.0–1.0).
    pub default_stability: f64,
    /// War fatigue shown when a country has none recorded (0.0–1.0).
    pub default_fatigue: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            population_threshold: 100_000,
            income_divisor: 100,
            default_stability: 0.5,
            default_fatigue: 0.0,
        }
    }
}

impl LedgerConfig {
    pub(crate) fn effective_threshold(&self) -> u64 {
        self.population_threshold.max(1)
    }

    pub(crate) fn effective_income_divisor(&self) -> u64 {
        self.income_divisor.max(1)
    }
}
