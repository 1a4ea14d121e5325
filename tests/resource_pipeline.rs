mod common;

use nation_ledger::derive::economy::{
    ResourceOutlook, aggregate_biome_cells, collect_modifiers, compute_base_production,
    resource_outlook,
};
use nation_ledger::model::BiomeCatalog;
use nation_ledger::{LedgerConfig, build_report};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

#[test]
fn single_province_wheat_scenario() {
    let mut snapshot = nation_ledger::CountrySnapshot::bare(common::country("c1", "Aldmark", 0));
    snapshot.provinces = vec![common::province("p1", &[("B1", 100)])];
    snapshot.events = vec![common::active_event("e1", 3, &[("RES_FOOD", 0.2)])];
    let catalog = BiomeCatalog::new(vec![common::biome("B1", "Plains", &[("Wheat", 10.0)])]);

    let modifiers = collect_modifiers(&snapshot.events, &snapshot.national_spirits);
    let outlook = resource_outlook(&snapshot, &catalog, &modifiers);

    let wheat = outlook.line("Wheat").expect("wheat is produced");
    assert_eq!(wheat.output.base, 10);
    assert_eq!(wheat.output.modifier, 0.2);
    assert_eq!(wheat.output.bonus, 2);
    assert_eq!(wheat.output.total, 12);
}

#[test]
fn full_country_resources() {
    let (snapshot, catalog) = common::build_test_country();

    let cells = aggregate_biome_cells(&snapshot.provinces);
    assert_eq!(cells.get("b-plains"), Some(&135));
    assert_eq!(cells.get("b-forest"), Some(&30));
    assert_eq!(cells.get("b-hills"), Some(&64));

    let base = compute_base_production(&cells, &catalog);
    // Game has a zero ratio, Spices needs 100 hill cells.
    assert!(!base.totals.contains_key("Game"));
    assert!(!base.totals.contains_key("Spices"));

    let modifiers = collect_modifiers(&snapshot.events, &snapshot.national_spirits);
    // The lapsed flood does not count.
    assert_eq!(modifiers.get("RES_FOOD"), Some(&0.25));

    let outlook = resource_outlook(&snapshot, &catalog, &modifiers);
    let names: Vec<&str> = outlook.lines().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Horses", "Iron", "Stone", "Wheat", "Wood"]);

    // 135 / 10 = 13, +25% = 3.25 -> 4
    let wheat = outlook.line("Wheat").unwrap();
    assert_eq!((wheat.output.base, wheat.output.bonus, wheat.output.total), (13, 4, 17));

    // 135 / 40 = 3, no horse modifier
    let horses = outlook.line("Horses").unwrap();
    assert_eq!((horses.output.base, horses.output.bonus, horses.output.total), (3, 0, 3));

    // 30 / 6 = 5
    let wood = outlook.line("Wood").unwrap();
    assert_eq!(wood.output.total, 5);

    // 64 / 8 = 8, +10% = 0.8 -> 1
    let stone = outlook.line("Stone").unwrap();
    assert_eq!((stone.output.base, stone.output.bonus, stone.output.total), (8, 1, 9));

    // 64 / 20 = 3, -5% = -0.15 -> -1
    let iron = outlook.line("Iron").unwrap();
    assert_eq!((iron.output.base, iron.output.bonus, iron.output.total), (3, -1, 2));
    assert_eq!(iron.breakdown.len(), 1);
    assert_eq!(iron.breakdown[0].biome, "Hills");
    assert_eq!(iron.breakdown[0].cells, 64);
}

#[test]
fn shuffled_provinces_produce_the_same_outlook() {
    let (snapshot, catalog) = common::build_test_country();
    let modifiers = collect_modifiers(&snapshot.events, &snapshot.national_spirits);
    let expected = resource_outlook(&snapshot, &catalog, &modifiers);

    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..10 {
        let mut shuffled = snapshot.clone();
        shuffled.provinces.shuffle(&mut rng);
        assert_eq!(resource_outlook(&shuffled, &catalog, &modifiers), expected);
    }
}

#[test]
fn crushing_malus_never_goes_negative() {
    let (mut snapshot, catalog) = common::build_test_country();
    snapshot
        .national_spirits
        .push(common::spirit("s-famine", &[("RES_FOOD", -4.0), ("RES_LUXURY", -9.0)]));

    let report = build_report(&snapshot, &catalog, &LedgerConfig::default());
    let wheat = report.resources.line("Wheat").unwrap();
    assert_eq!(wheat.output.total, 0);
    assert!(wheat.output.bonus < 0);
}

#[test]
fn country_without_biomes_has_no_production() {
    let (mut snapshot, catalog) = common::build_test_country();
    snapshot.provinces = vec![common::province("p-empty", &[])];

    let report = build_report(&snapshot, &catalog, &LedgerConfig::default());
    assert_eq!(report.resources, ResourceOutlook::NoProduction);
}

#[test]
fn full_report_numbers() {
    let (snapshot, catalog) = common::build_test_country();
    let report = build_report(&snapshot, &catalog, &LedgerConfig::default());

    assert_eq!(report.country_id, "c-aldmark");
    assert_eq!(report.treasury, 1_200);
    // 250k: efficiency = 1 / (1 + log10(2.5)) ~= 0.7153
    assert_eq!(report.economy.base_income, 2_500);
    assert_eq!(report.economy.final_income, 1_788);
    assert_eq!(report.military.available_manpower, 5_000);
    assert_eq!(report.military.total_units, 5_000);
    assert_eq!(report.standing.stability_percent, 62);
    assert_eq!(report.standing.fatigue_percent, 10);
}
