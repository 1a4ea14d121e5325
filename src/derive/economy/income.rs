use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;

/// Per-turn treasury income of a country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeSummary {
    /// Administrative efficiency, in (0, 1].
    pub efficiency: f64,
    pub base_income: u64,
    pub final_income: u64,
    /// Whether the population is past the efficiency threshold.
    pub over_threshold: bool,
}

/// `1.0` up to `threshold`, then `1 / (1 + log10(population / threshold))`.
///
/// Non-increasing in population and never reaches 0. A zero threshold is
/// treated as 1.
pub fn administrative_efficiency(population: u64, threshold: u64) -> f64 {
    let threshold = threshold.max(1);
    if population <= threshold {
        return 1.0;
    }
    1.0 / (1.0 + (population as f64 / threshold as f64).log10())
}

pub fn treasury_income(population: u64, config: &LedgerConfig) -> IncomeSummary {
    let threshold = config.effective_threshold();
    let efficiency = administrative_efficiency(population, threshold);
    let base_income = population / config.effective_income_divisor();
    let final_income = (base_income as f64 * efficiency).floor() as u64;
    IncomeSummary {
        efficiency,
        base_income,
        final_income,
        over_threshold: population > threshold,
    }
}
