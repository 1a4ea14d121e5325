use std::collections::BTreeMap;

use tracing::warn;

use crate::model::{Bonus, Event, NationalSpirit};

/// Summed modifier per bonus type name. Missing categories mean 0.
pub type ModifierTotals = BTreeMap<String, f64>;

/// Sum the bonuses of every active event and every national spirit.
///
/// Inactive events contribute nothing whatever their remaining turns.
/// Spirits have no activity flag and always contribute.
pub fn collect_modifiers(events: &[Event], spirits: &[NationalSpirit]) -> ModifierTotals {
    let mut totals = ModifierTotals::new();

    for event in events.iter().filter(|e| e.is_active) {
        if event.active_for == 0 {
            warn!(
                event_id = %event.id,
                event = %event.name,
                "event is active with no turns remaining; applying its bonuses anyway"
            );
        }
        add_bonuses(&mut totals, &event.bonuses);
    }

    for spirit in spirits {
        add_bonuses(&mut totals, &spirit.bonuses);
    }

    totals
}

fn add_bonuses(totals: &mut ModifierTotals, bonuses: &[Bonus]) {
    for bonus in bonuses {
        *totals.entry(bonus.bonus_type.clone()).or_insert(0.0) += bonus.modifier_value;
    }
}
