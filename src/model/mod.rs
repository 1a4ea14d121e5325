pub mod country;
pub mod geography;
pub mod modifier;
pub mod snapshot;

pub use country::{Army, City, Country, Regime};
pub use geography::{Biome, BiomeCatalog, BiomeResource, Province, ProvinceBiome, ResourceType};
pub use modifier::{Bonus, BonusCategory, Event, NationalSpirit};
pub use snapshot::CountrySnapshot;
