use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::biomes::BiomeCells;
use crate::model::BiomeCatalog;

/// One biome's contribution to a resource total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionDetail {
    /// Biome display name.
    pub biome: String,
    /// All of the country's cells of that biome.
    pub cells: u64,
    /// Cells needed per unit.
    pub ratio: f64,
    pub amount: u64,
}

/// Unmodified production per resource name, with the per-biome breakdown
/// behind each total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseProduction {
    pub totals: BTreeMap<String, u64>,
    /// Contributions in biome-mapping order.
    pub details: BTreeMap<String, Vec<ProductionDetail>>,
}

impl BaseProduction {
    /// True when no biome yields a single unit of anything.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Units of one resource produced by `cells` cells at `quantity` cells per
/// unit. Non-positive (or NaN) ratios are non-productive.
pub fn units_from_cells(cells: u64, quantity: f64) -> u64 {
    if quantity > 0.0 {
        (cells as f64 / quantity).floor() as u64
    } else {
        0
    }
}

/// Turn biome cell totals into base production using the catalog's ratios.
///
/// Orphan biome ids, non-positive ratios and rows without a resource type
/// are skipped with a warning.
pub fn compute_base_production(cells: &BiomeCells, catalog: &BiomeCatalog) -> BaseProduction {
    let mut production = BaseProduction::default();

    for (biome_id, &total_cells) in cells {
        let Some(biome) = catalog.get(biome_id) else {
            warn!(biome_id = %biome_id, "province references a biome missing from the catalog");
            continue;
        };

        for resource in &biome.resources {
            if resource.quantity.is_nan() || resource.quantity <= 0.0 {
                warn!(
                    biome = %biome.name,
                    quantity = resource.quantity,
                    "skipping biome resource with non-positive ratio"
                );
                continue;
            }
            let Some(resource_type) = &resource.resource_type else {
                warn!(biome = %biome.name, "skipping biome resource with no resource type");
                continue;
            };

            let amount = units_from_cells(total_cells, resource.quantity);
            if amount == 0 {
                continue;
            }

            let total = production
                .totals
                .entry(resource_type.name.clone())
                .or_insert(0);
            *total = total.saturating_add(amount);
            production
                .details
                .entry(resource_type.name.clone())
                .or_default()
                .push(ProductionDetail {
                    biome: biome.name.clone(),
                    cells: total_cells,
                    ratio: resource.quantity,
                    amount,
                });
        }
    }

    production
}
