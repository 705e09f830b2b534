//! Food reference records

use serde::{Deserialize, Serialize};

use crate::types::Macronutrients;

/// Food category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Fruit,
    Vegetable,
    Protein,
    Carbohydrate,
    Dairy,
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodCategory::Fruit => write!(f, "fruit"),
            FoodCategory::Vegetable => write!(f, "vegetable"),
            FoodCategory::Protein => write!(f, "protein"),
            FoodCategory::Carbohydrate => write!(f, "carbohydrate"),
            FoodCategory::Dairy => write!(f, "dairy"),
        }
    }
}

/// A reference food entry with nutrition facts per 100 g
///
/// Records are immutable once loaded into a catalog. The `key` is the stable
/// lookup identifier and must also appear in `aliases` so that resolving the
/// key itself always succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub key: String,
    pub display_name: String,
    pub category: FoodCategory,
    pub calories_per_100g: f64,
    pub macros_per_100g: Macronutrients,
    /// Plausible single-serving weight in grams
    pub typical_portion_grams: f64,
    /// Case-insensitive names a user or vision service would produce
    pub aliases: Vec<String>,
}
