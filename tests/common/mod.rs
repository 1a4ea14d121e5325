#![allow(dead_code)]

use nation_ledger::model::*;

pub fn country(id: &str, name: &str, population: u64) -> Country {
    Country {
        id: id.to_string(),
        name: name.to_string(),
        population,
        treasury: 0,
        stability_base: None,
        fatigue: None,
    }
}

pub fn province(id: &str, biomes: &[(&str, u64)]) -> Province {
    Province {
        id: id.to_string(),
        name: format!("Province {id}"),
        population: 0,
        biomes: biomes
            .iter()
            .map(|&(biome_id, cell_count)| ProvinceBiome {
                biome_id: biome_id.to_string(),
                cell_count,
            })
            .collect(),
    }
}

pub fn biome(id: &str, name: &str, resources: &[(&str, f64)]) -> Biome {
    Biome {
        id: id.to_string(),
        name: name.to_string(),
        habitability: 1.0,
        resources: resources
            .iter()
            .map(|&(resource, quantity)| BiomeResource {
                quantity,
                resource_type: Some(ResourceType {
                    id: format!("rt-{}", resource.to_lowercase()),
                    name: resource.to_string(),
                    bonus_category: None,
                }),
            })
            .collect(),
    }
}

pub fn active_event(id: &str, active_for: u32, bonuses: &[(&str, f64)]) -> Event {
    Event {
        id: id.to_string(),
        name: format!("Event {id}"),
        description: None,
        is_active: true,
        active_for,
        bonuses: bonuses.iter().map(|&(t, v)| Bonus::new(t, v)).collect(),
    }
}

pub fn spirit(id: &str, bonuses: &[(&str, f64)]) -> NationalSpirit {
    NationalSpirit {
        id: id.to_string(),
        name: format!("Spirit {id}"),
        description: None,
        icon: None,
        bonuses: bonuses.iter().map(|&(t, v)| Bonus::new(t, v)).collect(),
    }
}

/// Two provinces over three biomes, one active and one lapsed event, one
/// national spirit.
pub fn build_test_country() -> (CountrySnapshot, BiomeCatalog) {
    let mut snapshot = CountrySnapshot::bare(Country {
        treasury: 1_200,
        stability_base: Some(0.62),
        fatigue: Some(0.1),
        ..country("c-aldmark", "Aldmark", 250_000)
    });
    snapshot.regime = Some(Regime {
        id: "r-monarchy".to_string(),
        name: "Feudal Monarchy".to_string(),
        base_manpower_rate: 0.02,
    });
    snapshot.army = Some(Army {
        infantry: 3_000,
        archers: 1_000,
        cavalry: 500,
        artillery: 0,
        fleet: 500,
    });
    snapshot.provinces = vec![
        province("p-greenvale", &[("b-plains", 120), ("b-forest", 30)]),
        province("p-stonereach", &[("b-hills", 64), ("b-plains", 15)]),
    ];
    snapshot.events = vec![
        active_event("e-harvest", 2, &[("RES_FOOD", 0.25)]),
        Event {
            is_active: false,
            ..active_event("e-flood", 4, &[("RES_FOOD", -0.5)])
        },
    ];
    snapshot.national_spirits = vec![spirit("s-masons", &[("RES_STONE", 0.1), ("RES_IRON", -0.05)])];

    let catalog = BiomeCatalog::new(vec![
        biome("b-plains", "Plains", &[("Wheat", 10.0), ("Horses", 40.0)]),
        biome("b-forest", "Forest", &[("Wood", 6.0), ("Game", 0.0)]),
        biome("b-hills", "Hills", &[("Stone", 8.0), ("Iron", 20.0), ("Spices", 100.0)]),
    ]);

    (snapshot, catalog)
}
