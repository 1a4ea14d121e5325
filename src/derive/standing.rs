use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;
use crate::model::Country;

/// Stability and war fatigue as whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub stability_percent: i64,
    pub fatigue_percent: i64,
}

/// Round a 0.0–1.0 fraction to a whole percentage, halves going up.
pub fn to_percent(fraction: f64) -> i64 {
    (fraction * 100.0 + 0.5).floor() as i64
}

pub fn standing(country: &Country, config: &LedgerConfig) -> Standing {
    Standing {
        stability_percent: to_percent(country.stability_base.unwrap_or(config.default_stability)),
        fatigue_percent: to_percent(country.fatigue.unwrap_or(config.default_fatigue)),
    }
}
