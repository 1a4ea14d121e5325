use serde::{Deserialize, Serialize};

/// A modifier bucket from the `BonusType` table.
///
/// The resource buckets are named; anything else the table holds (stability,
/// diplomacy, ...) is carried as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BonusCategory {
    Food,
    Wood,
    Stone,
    Iron,
    Horses,
    Mana,
    Luxury,
    Custom(String),
}

string_vocab!(BonusCategory, open "bonus category", {
    Food => "RES_FOOD",
    Wood => "RES_WOOD",
    Stone => "RES_STONE",
    Iron => "RES_IRON",
    Horses => "RES_HORSES",
    Mana => "RES_MANA",
    Luxury => "RES_LUXURY",
});

/// A percentage modifier granted by an event or a national spirit.
/// `0.15` means +15%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    /// Name of the `BonusType` row, e.g. `RES_FOOD`.
    pub bonus_type: String,
    pub modifier_value: f64,
}

impl Bonus {
    pub fn new(bonus_type: impl Into<String>, modifier_value: f64) -> Self {
        Self {
            bonus_type: bonus_type.into(),
            modifier_value,
        }
    }
}

/// Time-limited modifier grant. `is_active` alone decides whether its
/// bonuses apply; `active_for` is maintained by turn processing elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    /// Remaining turns.
    #[serde(default)]
    pub active_for: u32,
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
}

/// Permanent modifier grant. Always applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalSpirit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
}
