//! Nutrition analysis output models

use serde::Serialize;

use crate::models::food::FoodCategory;
use crate::types::{Macronutrients, NutritionFacts, PortionNutrition};

/// Nutrition estimate for a single resolved detection
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemNutrition {
    /// Display name of the matched catalog record
    pub name: String,
    /// Label exactly as the recognizer reported it
    pub original_name: String,
    pub category: FoodCategory,
    pub confidence: f64,
    /// Inferred portion weight in grams
    pub estimated_weight: u32,
    /// Calories scaled to the estimated weight
    pub calories: u32,
    /// Macros scaled to the estimated weight, 1 decimal
    pub macronutrients: Macronutrients,
    /// Unscaled reference values for audit/display
    pub nutrition_per_100g: NutritionFacts,
}

/// Percentage share of each energy-bearing macro
///
/// Percentages are rounded independently and are not guaranteed to sum to
/// exactly 100.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MacroDistribution {
    pub proteins: u32,
    pub carbohydrates: u32,
    pub fats: u32,
}

/// Counts and confidence summary for one analysis
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_foods_detected: usize,
    pub foods_processed: usize,
    pub foods_not_found: usize,
    /// Mean confidence of matched items only, 2 decimals; 0 if none matched
    pub average_confidence: f64,
}

/// Aggregate nutrition report for one analysis call
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionReport {
    pub total_calories: u32,
    /// Per-macro totals, each rounded to 1 decimal
    pub macronutrients: Macronutrients,
    pub macro_distribution: MacroDistribution,
    pub detected_foods: Vec<FoodItemNutrition>,
    pub summary: AnalysisSummary,
    /// Fixed disclaimer noting these are AI-assisted estimates
    pub estimation_note: String,
}

/// Catalog-browsing view of a single food, independent of any detection
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodInfo {
    pub name: String,
    pub category: FoodCategory,
    pub typical_portion_grams: f64,
    pub nutrition_per_100g: NutritionFacts,
    /// Values scaled to the typical portion weight, not to any detection
    pub nutrition_per_portion: PortionNutrition,
    pub aliases: Vec<String>,
}
