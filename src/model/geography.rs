use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::modifier::BonusCategory;

// ---------------------------------------------------------------------------
// Provinces
// ---------------------------------------------------------------------------

/// How many map cells of one biome fall inside a province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceBiome {
    pub biome_id: String,
    pub cell_count: u64,
}

/// A province owned by the snapshot's country. A province should list each
/// biome at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub biomes: Vec<ProvinceBiome>,
}

// ---------------------------------------------------------------------------
// Biome catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    pub id: String,
    pub name: String,
    /// Explicit modifier bucket. When absent the category is guessed from
    /// the resource name.
    #[serde(default)]
    pub bonus_category: Option<BonusCategory>,
}

/// One resource a biome produces: every `quantity` cells yield one unit
/// per turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomeResource {
    pub quantity: f64,
    /// `None` when the row points at a resource type that no longer exists.
    pub resource_type: Option<ResourceType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biome {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub habitability: f64,
    #[serde(default)]
    pub resources: Vec<BiomeResource>,
}

/// Every biome definition with its resource ratios, indexed by biome id.
///
/// Serializes as a plain list of biomes. When two biomes share an id the
/// first one wins lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Biome>", into = "Vec<Biome>")]
pub struct BiomeCatalog {
    biomes: Vec<Biome>,
    index: HashMap<String, usize>,
}

impl BiomeCatalog {
    pub fn new(biomes: Vec<Biome>) -> Self {
        let mut index = HashMap::with_capacity(biomes.len());
        for (i, biome) in biomes.iter().enumerate() {
            index.entry(biome.id.clone()).or_insert(i);
        }
        Self { biomes, index }
    }

    pub fn get(&self, biome_id: &str) -> Option<&Biome> {
        self.index.get(biome_id).map(|&i| &self.biomes[i])
    }

    pub fn biomes(&self) -> &[Biome] {
        &self.biomes
    }

    /// Every resource type referenced by the catalog, in catalog order.
    /// A type used by several biomes is yielded once per use.
    pub fn resource_types(&self) -> impl Iterator<Item = &ResourceType> {
        self.biomes
            .iter()
            .flat_map(|b| b.resources.iter())
            .filter_map(|r| r.resource_type.as_ref())
    }

    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

impl PartialEq for BiomeCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.biomes == other.biomes
    }
}

impl From<Vec<Biome>> for BiomeCatalog {
    fn from(biomes: Vec<Biome>) -> Self {
        Self::new(biomes)
    }
}

impl From<BiomeCatalog> for Vec<Biome> {
    fn from(catalog: BiomeCatalog) -> Self {
        catalog.biomes
    }
}
