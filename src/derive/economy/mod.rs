//! Resource and treasury derivations for one country.
//!
//! Resource production runs in four steps: biome cells are summed across
//! provinces, turned into base production via the catalog's ratios, then
//! adjusted by the summed event and national-spirit modifiers. Income is
//! independent and only needs the population.

pub mod biomes;
pub mod bonuses;
pub mod income;
pub mod modifiers;
pub mod production;

use serde::{Deserialize, Serialize};

pub use biomes::{BiomeCells, aggregate_biome_cells};
pub use bonuses::{
    CategoryResolver, ResourceYield, apply_modifier, apply_modifiers, bonus_amount,
    category_from_name,
};
pub use income::{IncomeSummary, administrative_efficiency, treasury_income};
pub use modifiers::{ModifierTotals, collect_modifiers};
pub use production::{BaseProduction, ProductionDetail, compute_base_production, units_from_cells};

use crate::model::{BiomeCatalog, CountrySnapshot};

/// One resource as shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLine {
    pub name: String,
    #[serde(flatten)]
    pub output: ResourceYield,
    pub breakdown: Vec<ProductionDetail>,
}

/// What a country's land produces. `NoProduction` must be rendered as such,
/// not as an empty table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResourceOutlook {
    NoProduction,
    /// Sorted by resource name.
    Producing { resources: Vec<ResourceLine> },
}

impl ResourceOutlook {
    pub fn lines(&self) -> &[ResourceLine] {
        match self {
            ResourceOutlook::NoProduction => &[],
            ResourceOutlook::Producing { resources } => resources,
        }
    }

    pub fn line(&self, name: &str) -> Option<&ResourceLine> {
        self.lines().iter().find(|l| l.name == name)
    }
}

/// Run the resource pipeline for one country with already-collected
/// modifiers.
pub fn resource_outlook(
    snapshot: &CountrySnapshot,
    catalog: &BiomeCatalog,
    modifiers: &ModifierTotals,
) -> ResourceOutlook {
    let cells = aggregate_biome_cells(&snapshot.provinces);
    let BaseProduction { totals, mut details } = compute_base_production(&cells, catalog);
    if totals.is_empty() {
        return ResourceOutlook::NoProduction;
    }

    let resolver = CategoryResolver::from_catalog(catalog);
    let resources = apply_modifiers(&totals, modifiers, &resolver)
        .into_iter()
        .map(|(name, output)| {
            let breakdown = details.remove(&name).unwrap_or_default();
            ResourceLine {
                name,
                output,
                breakdown,
            }
        })
        .collect();
    ResourceOutlook::Producing { resources }
}
