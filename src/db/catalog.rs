use sqlx::{PgPool, Row};
use tracing::{debug, warn};

use crate::model::{Biome, BiomeCatalog, BiomeResource, BonusCategory, ResourceType};

/// Load every biome with its resource ratios.
///
/// `"ResourceType"."bonusCategory"` is optional. Databases without the
/// column load with no explicit categories, so every resource falls back
/// to the name heuristic.
pub async fn fetch_biome_catalog(pool: &PgPool) -> Result<BiomeCatalog, sqlx::Error> {
    let category_column = if has_bonus_category_column(pool).await? {
        r#"rt."bonusCategory""#
    } else {
        debug!("\"ResourceType\" has no \"bonusCategory\" column; using name heuristic only");
        "NULL::text"
    };
    let sql = format!(
        r#"SELECT b.id::text AS id, b.name,
                  COALESCE(b.habitability, 0)::float8 AS habitability,
                  br."biomeId" IS NOT NULL AS has_resource,
                  COALESCE(br.quantity, 0)::float8 AS quantity,
                  rt.id::text AS resource_type_id,
                  rt.name AS resource_type_name,
                  {category_column} AS bonus_category
           FROM "Biome" b
           LEFT JOIN "BiomeResource" br ON br."biomeId" = b.id
           LEFT JOIN "ResourceType" rt ON rt.id = br."resourceTypeId"
           ORDER BY b.id, rt.name"#
    );
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    let mut biomes: Vec<Biome> = Vec::new();
    for row in &rows {
        let id: String = row.try_get("id")?;
        if biomes.last().is_none_or(|b| b.id != id) {
            biomes.push(Biome {
                name: row.try_get("name")?,
                habitability: row.try_get("habitability")?,
                resources: Vec::new(),
                id: id.clone(),
            });
        }

        let has_resource: bool = row.try_get("has_resource")?;
        if !has_resource {
            continue;
        }
        let resource_type_id: Option<String> = row.try_get("resource_type_id")?;
        let resource_type = match resource_type_id {
            Some(type_id) => {
                let raw_category: Option<String> = row.try_get("bonus_category")?;
                Some(ResourceType {
                    bonus_category: raw_category.and_then(|c| parse_category(c, &type_id)),
                    name: row.try_get("resource_type_name")?,
                    id: type_id,
                })
            }
            None => None,
        };
        if let Some(biome) = biomes.last_mut() {
            biome.resources.push(BiomeResource {
                quantity: row.try_get("quantity")?,
                resource_type,
            });
        }
    }

    Ok(BiomeCatalog::new(biomes))
}

fn parse_category(raw: String, resource_type_id: &str) -> Option<BonusCategory> {
    match BonusCategory::try_from(raw) {
        Ok(category) => Some(category),
        Err(e) => {
            warn!(resource_type_id, error = %e, "ignoring invalid bonus category");
            None
        }
    }
}

async fn has_bonus_category_column(pool: &PgPool) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"SELECT EXISTS (
               SELECT 1 FROM information_schema.columns
               WHERE table_schema = current_schema()
                 AND table_name = 'ResourceType'
                 AND column_name = 'bonusCategory'
           )"#,
    )
    .fetch_one(pool)
    .await
}
