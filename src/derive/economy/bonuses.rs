use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::modifiers::ModifierTotals;
use crate::model::{BiomeCatalog, BonusCategory};

/// A resource's production after modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceYield {
    pub base: u64,
    pub modifier: f64,
    pub bonus: i64,
    pub total: u64,
}

/// Guess a resource's modifier bucket from its display name.
///
/// Case-insensitive substring match, first rule wins, `RES_LUXURY` when
/// nothing matches. Renaming or translating a resource silently moves it
/// to another bucket; prefer an explicit `ResourceType::bonus_category`.
pub fn category_from_name(resource_name: &str) -> BonusCategory {
    let name = resource_name.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| name.contains(w));

    if mentions(&["food", "nourriture", "blé", "wheat"]) {
        BonusCategory::Food
    } else if mentions(&["wood", "bois"]) {
        BonusCategory::Wood
    } else if mentions(&["stone", "pierre"]) {
        BonusCategory::Stone
    } else if mentions(&["iron", "fer"]) {
        BonusCategory::Iron
    } else if mentions(&["horse", "cheval", "chevaux"]) {
        BonusCategory::Horses
    } else if mentions(&["mana"]) {
        BonusCategory::Mana
    } else {
        debug!(resource = resource_name, "no category keyword; using RES_LUXURY");
        BonusCategory::Luxury
    }
}

/// Maps resource names to bonus categories: explicit categories from the
/// catalog first, the name heuristic for everything else.
#[derive(Debug, Clone, Default)]
pub struct CategoryResolver {
    explicit: HashMap<String, BonusCategory>,
}

impl CategoryResolver {
    /// Name heuristic only.
    pub fn by_name() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: &BiomeCatalog) -> Self {
        let mut explicit: HashMap<String, BonusCategory> = HashMap::new();
        for resource_type in catalog.resource_types() {
            let Some(category) = &resource_type.bonus_category else {
                continue;
            };
            match explicit.entry(resource_type.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(category.clone());
                }
                Entry::Occupied(slot) if slot.get() != category => warn!(
                    resource = %resource_type.name,
                    kept = %slot.get(),
                    ignored = %category,
                    "resource name mapped to two categories; keeping the first"
                ),
                Entry::Occupied(_) => {}
            }
        }
        Self { explicit }
    }

    pub fn resolve(&self, resource_name: &str) -> BonusCategory {
        match self.explicit.get(resource_name) {
            Some(category) => category.clone(),
            None => category_from_name(resource_name),
        }
    }
}

/// Bonus units for `base` at `modifier`, rounded away from zero.
pub fn bonus_amount(base: u64, modifier: f64) -> i64 {
    let raw = base as f64 * modifier;
    if raw > 0.0 {
        raw.ceil() as i64
    } else if raw < 0.0 {
        raw.floor() as i64
    } else {
        0
    }
}

/// Apply a modifier to a base amount. The total never drops below zero.
pub fn apply_modifier(base: u64, modifier: f64) -> ResourceYield {
    let bonus = bonus_amount(base, modifier);
    let signed_total = i128::from(base) + i128::from(bonus);
    if signed_total < 0 {
        debug!(base, modifier, bonus, "modifier would make production negative; clamping to 0");
    }
    ResourceYield {
        base,
        modifier,
        bonus,
        total: signed_total.clamp(0, i128::from(u64::MAX)) as u64,
    }
}

/// Apply the summed modifiers to every resource's base production.
pub fn apply_modifiers(
    base: &BTreeMap<String, u64>,
    modifiers: &ModifierTotals,
    resolver: &CategoryResolver,
) -> BTreeMap<String, ResourceYield> {
    base.iter()
        .map(|(name, &amount)| {
            let category = resolver.resolve(name);
            let modifier = modifiers.get(category.as_str()).copied().unwrap_or(0.0);
            (name.clone(), apply_modifier(amount, modifier))
        })
        .collect()
}
