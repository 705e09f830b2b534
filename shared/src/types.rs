//! Common nutrition value types

use serde::{Deserialize, Serialize};

/// Macronutrient amounts in grams
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Macronutrients {
    pub proteins: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub fiber: f64,
}

impl Macronutrients {
    /// Total of the energy-bearing macros. Fiber is excluded from the
    /// distribution denominator.
    pub fn energy_macro_total(&self) -> f64 {
        self.proteins + self.carbohydrates + self.fats
    }
}

/// Nutrition facts per 100 g of food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    pub calories: f64,
    pub macronutrients: Macronutrients,
}

/// Nutrition facts scaled to a concrete portion weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortionNutrition {
    pub calories: u32,
    pub macronutrients: Macronutrients,
}
