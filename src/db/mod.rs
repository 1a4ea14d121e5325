//! Read-only queries against the game database.
//!
//! The schema belongs to the admin application; this module only reads it.
//! Ids are read as text and numeric columns through explicit casts so the
//! queries do not depend on the exact column types.

mod catalog;
mod country;

pub use catalog::fetch_biome_catalog;
pub use country::{fetch_country_snapshot, fetch_country_snapshot_by_id};

use tracing::warn;

/// Clamp a count read from the database to zero, warning if it was
/// negative.
fn non_negative(value: i64, column: &str, row_id: &str) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        warn!(column, row_id, value, "negative value in database; using 0");
        0
    })
}
