use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use crate::model::Province;

/// Total cells per biome id across a set of provinces.
///
/// Biomes no province references are absent rather than zero.
pub type BiomeCells = BTreeMap<String, u64>;

/// Sum every province's biome cell counts, keyed by biome id.
///
/// The result does not depend on province order.
pub fn aggregate_biome_cells(provinces: &[Province]) -> BiomeCells {
    let mut totals = BiomeCells::new();
    for province in provinces {
        let mut seen: HashSet<&str> = HashSet::with_capacity(province.biomes.len());
        for entry in &province.biomes {
            if !seen.insert(entry.biome_id.as_str()) {
                warn!(
                    province_id = %province.id,
                    biome_id = %entry.biome_id,
                    "province lists the same biome more than once; counting both rows"
                );
            }
            let total = totals.entry(entry.biome_id.clone()).or_insert(0);
            *total = total.saturating_add(entry.cell_count);
        }
    }
    totals
}
