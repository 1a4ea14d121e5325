use serde::{Deserialize, Serialize};

use crate::model::{Army, Regime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum UnitKind {
    Infantry,
    Archers,
    Cavalry,
    Artillery,
    Fleet,
}

string_vocab!(UnitKind {
    Infantry => "infantry",
    Archers => "archers",
    Cavalry => "cavalry",
    Artillery => "artillery",
    Fleet => "fleet",
});

impl UnitKind {
    /// Display order.
    pub const ALL: [UnitKind; 5] = [
        UnitKind::Infantry,
        UnitKind::Archers,
        UnitKind::Cavalry,
        UnitKind::Artillery,
        UnitKind::Fleet,
    ];
}

pub fn unit_count(army: &Army, kind: UnitKind) -> u64 {
    match kind {
        UnitKind::Infantry => army.infantry,
        UnitKind::Archers => army.archers,
        UnitKind::Cavalry => army.cavalry,
        UnitKind::Artillery => army.artillery,
        UnitKind::Fleet => army.fleet,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitShare {
    pub kind: UnitKind,
    pub count: u64,
    /// Fraction of all units, 0 when the army is empty.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilitarySummary {
    pub manpower_rate: f64,
    pub available_manpower: u64,
    pub total_units: u64,
    pub composition: Vec<UnitShare>,
}

/// Mobilizable manpower and army composition. No regime means a rate of 0;
/// no army row means an empty army.
pub fn military_summary(
    population: u64,
    regime: Option<&Regime>,
    army: Option<&Army>,
) -> MilitarySummary {
    let manpower_rate = regime.map_or(0.0, |r| r.base_manpower_rate);
    let available_manpower = (population as f64 * manpower_rate).floor().max(0.0) as u64;

    let army = army.copied().unwrap_or_default();
    let total_units = UnitKind::ALL
        .iter()
        .map(|&k| unit_count(&army, k))
        .fold(0u64, u64::saturating_add);
    let composition = UnitKind::ALL
        .iter()
        .map(|&kind| {
            let count = unit_count(&army, kind);
            let share = if total_units > 0 {
                count as f64 / total_units as f64
            } else {
                0.0
            };
            UnitShare { kind, count, share }
        })
        .collect();

    MilitarySummary {
        manpower_rate,
        available_manpower,
        total_units,
        composition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regime(rate: f64) -> Regime {
        Regime {
            id: "r1".to_string(),
            name: "Monarchy".to_string(),
            base_manpower_rate: rate,
        }
    }

    #[test]
    fn manpower_floors() {
        let summary = military_summary(12_345, Some(&regime(0.025)), None);
        assert_eq!(summary.available_manpower, 308);
        assert_eq!(summary.manpower_rate, 0.025);
    }

    #[test]
    fn no_regime_means_no_manpower() {
        let summary = military_summary(1_000_000, None, None);
        assert_eq!(summary.available_manpower, 0);
        assert_eq!(summary.manpower_rate, 0.0);
    }

    #[test]
    fn negative_rate_gives_zero() {
        let summary = military_summary(1_000, Some(&regime(-0.5)), None);
        assert_eq!(summary.available_manpower, 0);
    }

    #[test]
    fn composition_shares() {
        let army = Army {
            infantry: 600,
            archers: 200,
            cavalry: 100,
            artillery: 50,
            fleet: 50,
        };
        let summary = military_summary(0, None, Some(&army));
        assert_eq!(summary.total_units, 1_000);
        let kinds: Vec<UnitKind> = summary.composition.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, UnitKind::ALL.to_vec());
        assert_eq!(summary.composition[0].share, 0.6);
        assert_eq!(summary.composition[4].count, 50);
    }

    #[test]
    fn empty_army_has_zero_shares() {
        let summary = military_summary(5_000, Some(&regime(0.1)), None);
        assert_eq!(summary.total_units, 0);
        assert!(summary.composition.iter().all(|s| s.share == 0.0));
        assert_eq!(summary.composition.len(), 5);
    }
}
