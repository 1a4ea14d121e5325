use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{debug, warn};

use super::non_negative;
use crate::model::{
    Army, Bonus, City, Country, CountrySnapshot, Event, NationalSpirit, Province, ProvinceBiome,
    Regime,
};
use crate::session::RequestContext;

const COUNTRY_SELECT: &str = r#"
    SELECT c.id::text AS id,
           c.name,
           COALESCE(c.population, 0)::bigint AS population,
           COALESCE(c.treasury, 0)::bigint AS treasury,
           c."stabilityBase"::float8 AS stability_base,
           c.fatigue::float8 AS fatigue,
           c."regimeId"::text AS regime_id
    FROM "Country" c"#;

/// Load the snapshot of the country bound to the requesting player.
///
/// Returns `Ok(None)` when the player has no country yet.
pub async fn fetch_country_snapshot(
    pool: &PgPool,
    ctx: &RequestContext,
) -> Result<Option<CountrySnapshot>, sqlx::Error> {
    let sql = format!(
        r#"{COUNTRY_SELECT}
    JOIN "Player" p ON p."countryId" = c.id
    WHERE p."discordId" = $1
    LIMIT 1"#
    );
    let row = sqlx::query(&sql)
        .bind(&ctx.discord_id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => load_snapshot(pool, &row).await.map(Some),
        None => {
            debug!(discord_id = %ctx.discord_id, "player has no country");
            Ok(None)
        }
    }
}

/// Load a country snapshot by country id. Returns `Ok(None)` when no such
/// country exists.
pub async fn fetch_country_snapshot_by_id(
    pool: &PgPool,
    country_id: &str,
) -> Result<Option<CountrySnapshot>, sqlx::Error> {
    let sql = format!("{COUNTRY_SELECT}\n    WHERE c.id::text = $1");
    let row = sqlx::query(&sql)
        .bind(country_id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => load_snapshot(pool, &row).await.map(Some),
        None => Ok(None),
    }
}

async fn load_snapshot(pool: &PgPool, row: &PgRow) -> Result<CountrySnapshot, sqlx::Error> {
    let country = country_from_row(row)?;
    let regime_id: Option<String> = row.try_get("regime_id")?;

    let regime = match regime_id {
        Some(id) => fetch_regime(pool, &id).await?,
        None => None,
    };

    Ok(CountrySnapshot {
        regime,
        army: fetch_army(pool, &country.id).await?,
        provinces: fetch_provinces(pool, &country.id).await?,
        cities: fetch_cities(pool, &country.id).await?,
        events: fetch_events(pool, &country.id).await?,
        national_spirits: fetch_national_spirits(pool, &country.id).await?,
        country,
    })
}

fn country_from_row(row: &PgRow) -> Result<Country, sqlx::Error> {
    let id: String = row.try_get("id")?;
    Ok(Country {
        population: non_negative(row.try_get("population")?, "Country.population", &id),
        treasury: row.try_get("treasury")?,
        stability_base: row.try_get("stability_base")?,
        fatigue: row.try_get("fatigue")?,
        name: row.try_get("name")?,
        id,
    })
}

async fn fetch_regime(pool: &PgPool, regime_id: &str) -> Result<Option<Regime>, sqlx::Error> {
    let row = sqlx::query(
        r#"SELECT id::text AS id, name,
                  COALESCE("baseManpowerRate", 0)::float8 AS base_manpower_rate
           FROM "Regime" WHERE id::text = $1"#,
    )
    .bind(regime_id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| -> Result<Regime, sqlx::Error> {
        Ok(Regime {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            base_manpower_rate: row.try_get("base_manpower_rate")?,
        })
    })
    .transpose()
}

async fn fetch_army(pool: &PgPool, country_id: &str) -> Result<Option<Army>, sqlx::Error> {
    let row = sqlx::query(
        r#"SELECT COALESCE(infantry, 0)::bigint AS infantry,
                  COALESCE(archers, 0)::bigint AS archers,
                  COALESCE(cavalry, 0)::bigint AS cavalry,
                  COALESCE(artillery, 0)::bigint AS artillery,
                  COALESCE(fleet, 0)::bigint AS fleet
           FROM "Army" WHERE "countryId"::text = $1
           LIMIT 1"#,
    )
    .bind(country_id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| -> Result<Army, sqlx::Error> {
        let count = |column: &str| -> Result<u64, sqlx::Error> {
            Ok(non_negative(row.try_get(column)?, column, country_id))
        };
        Ok(Army {
            infantry: count("infantry")?,
            archers: count("archers")?,
            cavalry: count("cavalry")?,
            artillery: count("artillery")?,
            fleet: count("fleet")?,
        })
    })
    .transpose()
}

async fn fetch_provinces(pool: &PgPool, country_id: &str) -> Result<Vec<Province>, sqlx::Error> {
    let rows = sqlx::query(
        r#"SELECT p.id::text AS id, p.name,
                  COALESCE(p.population, 0)::bigint AS population,
                  pb."biomeId"::text AS biome_id,
                  pb."cellCount"::bigint AS cell_count
           FROM "Province" p
           LEFT JOIN "ProvinceBiome" pb ON pb."provinceId" = p.id
           WHERE p."countryId"::text = $1
           ORDER BY p.id, pb."biomeId""#,
    )
    .bind(country_id)
    .fetch_all(pool)
    .await?;

    let mut provinces: Vec<Province> = Vec::new();
    for row in &rows {
        let id: String = row.try_get("id")?;
        if provinces.last().is_none_or(|p| p.id != id) {
            provinces.push(Province {
                name: row.try_get("name")?,
                population: non_negative(row.try_get("population")?, "Province.population", &id),
                biomes: Vec::new(),
                id: id.clone(),
            });
        }
        let biome_id: Option<String> = row.try_get("biome_id")?;
        let Some(biome_id) = biome_id else {
            continue;
        };
        let cell_count: Option<i64> = row.try_get("cell_count")?;
        let cell_count = non_negative(cell_count.unwrap_or(0), "ProvinceBiome.cellCount", &id);
        if let Some(province) = provinces.last_mut() {
            province.biomes.push(ProvinceBiome {
                biome_id,
                cell_count,
            });
        }
    }
    Ok(provinces)
}

async fn fetch_cities(pool: &PgPool, country_id: &str) -> Result<Vec<City>, sqlx::Error> {
    let rows = sqlx::query(
        r#"SELECT id::text AS id, name,
                  COALESCE(population, 0)::bigint AS population,
                  COALESCE("isCapital", false) AS is_capital,
                  COALESCE("isPort", false) AS is_port,
                  COALESCE("isWalled", false) AS is_walled,
                  COALESCE("hasCitadel", false) AS has_citadel,
                  COALESCE("hasMarketplace", false) AS has_marketplace,
                  COALESCE("hasReligiousCenter", false) AS has_religious_center,
                  COALESCE("hasShanty", false) AS has_shanty
           FROM "City"
           WHERE "countryId"::text = $1
           ORDER BY id"#,
    )
    .bind(country_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<City, sqlx::Error> {
            let id: String = row.try_get("id")?;
            Ok(City {
                name: row.try_get("name")?,
                population: non_negative(row.try_get("population")?, "City.population", &id),
                is_capital: row.try_get("is_capital")?,
                is_port: row.try_get("is_port")?,
                is_walled: row.try_get("is_walled")?,
                has_citadel: row.try_get("has_citadel")?,
                has_marketplace: row.try_get("has_marketplace")?,
                has_religious_center: row.try_get("has_religious_center")?,
                has_shanty: row.try_get("has_shanty")?,
                id,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Modifier sources
// ---------------------------------------------------------------------------

/// Read the optional bonus columns of a left-joined row. `None` when the
/// parent has no bonus on this row.
fn bonus_from_row(row: &PgRow, owner_id: &str) -> Result<Option<Bonus>, sqlx::Error> {
    let modifier_value: Option<f64> = row.try_get("modifier_value")?;
    let Some(modifier_value) = modifier_value else {
        return Ok(None);
    };
    let bonus_type: Option<String> = row.try_get("bonus_type")?;
    match bonus_type {
        Some(bonus_type) => Ok(Some(Bonus {
            bonus_type,
            modifier_value,
        })),
        None => {
            warn!(owner_id, "bonus references a missing bonus type; skipping");
            Ok(None)
        }
    }
}

async fn fetch_events(pool: &PgPool, country_id: &str) -> Result<Vec<Event>, sqlx::Error> {
    let rows = sqlx::query(
        r#"SELECT e.id::text AS id, e.name, e.description,
                  COALESCE(e."isActive", false) AS is_active,
                  COALESCE(e."activeFor", 0)::bigint AS active_for,
                  bt.name AS bonus_type,
                  eb."modifierValue"::float8 AS modifier_value
           FROM "Event" e
           LEFT JOIN "EventBonus" eb ON eb."eventId" = e.id
           LEFT JOIN "BonusType" bt ON bt.id = eb."bonusTypeId"
           WHERE e."countryId"::text = $1
           ORDER BY e.id, bt.name"#,
    )
    .bind(country_id)
    .fetch_all(pool)
    .await?;

    let mut events: Vec<Event> = Vec::new();
    for row in &rows {
        let id: String = row.try_get("id")?;
        if events.last().is_none_or(|e| e.id != id) {
            let active_for = non_negative(row.try_get("active_for")?, "Event.activeFor", &id);
            events.push(Event {
                name: row.try_get("name")?,
                description: row.try_get("description")?,
                is_active: row.try_get("is_active")?,
                active_for: u32::try_from(active_for).unwrap_or(u32::MAX),
                bonuses: Vec::new(),
                id: id.clone(),
            });
        }
        if let (Some(bonus), Some(event)) = (bonus_from_row(row, &id)?, events.last_mut()) {
            event.bonuses.push(bonus);
        }
    }
    Ok(events)
}

async fn fetch_national_spirits(
    pool: &PgPool,
    country_id: &str,
) -> Result<Vec<NationalSpirit>, sqlx::Error> {
    let rows = sqlx::query(
        r#"SELECT ns.id::text AS id, ns.name, ns.description, ns.icon,
                  bt.name AS bonus_type,
                  nsb."modifierValue"::float8 AS modifier_value
           FROM "NationalSpirit" ns
           LEFT JOIN "NationalSpiritBonus" nsb ON nsb."nationalSpiritId" = ns.id
           LEFT JOIN "BonusType" bt ON bt.id = nsb."bonusTypeId"
           WHERE ns."countryId"::text = $1
           ORDER BY ns.id, bt.name"#,
    )
    .bind(country_id)
    .fetch_all(pool)
    .await?;

    let mut spirits: Vec<NationalSpirit> = Vec::new();
    for row in &rows {
        let id: String = row.try_get("id")?;
        if spirits.last().is_none_or(|s| s.id != id) {
            spirits.push(NationalSpirit {
                name: row.try_get("name")?,
                description: row.try_get("description")?,
                icon: row.try_get("icon")?,
                bonuses: Vec::new(),
                id: id.clone(),
            });
        }
        if let (Some(bonus), Some(spirit)) = (bonus_from_row(row, &id)?, spirits.last_mut()) {
            spirit.bonuses.push(bonus);
        }
    }
    Ok(spirits)
}
