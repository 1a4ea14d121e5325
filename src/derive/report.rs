use serde::{Deserialize, Serialize};

use super::economy::{
    IncomeSummary, ModifierTotals, ResourceOutlook, collect_modifiers, resource_outlook,
    treasury_income,
};
use super::military::{MilitarySummary, military_summary};
use super::standing::{Standing, standing};
use crate::config::LedgerConfig;
use crate::model::{BiomeCatalog, CountrySnapshot};

/// Everything the dashboard shows for one country, as raw numbers.
/// Formatting is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryReport {
    pub country_id: String,
    pub country_name: String,
    pub population: u64,
    pub treasury: i64,
    pub economy: IncomeSummary,
    pub modifiers: ModifierTotals,
    pub resources: ResourceOutlook,
    pub military: MilitarySummary,
    pub standing: Standing,
}

pub fn build_report(
    snapshot: &CountrySnapshot,
    catalog: &BiomeCatalog,
    config: &LedgerConfig,
) -> CountryReport {
    let country = &snapshot.country;
    let modifiers = collect_modifiers(&snapshot.events, &snapshot.national_spirits);
    let resources = resource_outlook(snapshot, catalog, &modifiers);

    CountryReport {
        country_id: country.id.clone(),
        country_name: country.name.clone(),
        population: country.population,
        treasury: country.treasury,
        economy: treasury_income(country.population, config),
        modifiers,
        resources,
        military: military_summary(
            country.population,
            snapshot.regime.as_ref(),
            snapshot.army.as_ref(),
        ),
        standing: standing(country, config),
    }
}
