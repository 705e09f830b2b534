//! Nutrition estimation for resolved food candidates

use std::sync::Arc;

use shared::{
    AnalysisSummary, BoundingBox, Detection, FoodInfo, FoodItemNutrition, FoodRecord,
    MacroDistribution, Macronutrients, NutritionFacts, NutritionReport, PortionNutrition,
};

use crate::services::catalog::FoodCatalog;

/// Disclaimer attached to every report
pub const ESTIMATION_NOTE: &str = "Los valores nutricionales son estimaciones basadas en análisis \
     de IA y pueden variar según el tamaño real de las porciones.";

/// Portion weight is clamped to this band around the typical portion
const MIN_PORTION_FACTOR: f64 = 0.3;
const MAX_PORTION_FACTOR: f64 = 2.5;

/// Portion adjustment from recognizer confidence
///
/// Confidence reflects certainty of identity, not of size; lower confidence
/// pulls the estimate conservatively below the typical portion.
fn confidence_factor(confidence: f64) -> f64 {
    if confidence > 0.9 {
        1.0
    } else if confidence > 0.7 {
        0.9
    } else if confidence > 0.5 {
        0.8
    } else {
        0.7
    }
}

/// Portion adjustment from bounding-box area
///
/// The fraction of the frame an object occupies proxies its serving size.
/// Detections without usable geometry get a neutral factor.
fn size_factor(bounding_box: Option<&BoundingBox>) -> f64 {
    let Some(area) = bounding_box.and_then(BoundingBox::area) else {
        return 1.0;
    };
    if area > 0.3 {
        1.3
    } else if area > 0.15 {
        1.0
    } else if area > 0.05 {
        0.7
    } else {
        0.5
    }
}

/// Infer a plausible portion weight in grams for a detected food
///
/// `round(typical × confidence_factor × size_factor)`, clamped to
/// `[0.3 × typical, 2.5 × typical]` (both bounds rounded).
pub fn estimate_portion_weight(detection: &Detection, record: &FoodRecord) -> u32 {
    let base = record.typical_portion_grams;
    let estimated =
        (base * confidence_factor(detection.confidence) * size_factor(detection.bounding_box.as_ref()))
            .round();

    let min = (base * MIN_PORTION_FACTOR).round();
    let max = (base * MAX_PORTION_FACTOR).round();
    estimated.clamp(min, max) as u32
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Nutrition estimation service
///
/// Holds a shared read-only catalog; every method is a pure computation over
/// its inputs, safe to call from any number of threads.
#[derive(Clone)]
pub struct NutritionService {
    catalog: Arc<FoodCatalog>,
}

impl NutritionService {
    /// Create a new NutritionService over the given catalog
    pub fn new(catalog: Arc<FoodCatalog>) -> Self {
        Self { catalog }
    }

    /// Service backed by the bundled reference catalog
    pub fn with_builtin_catalog() -> Self {
        Self::new(FoodCatalog::builtin())
    }

    /// Nutrition estimate for one candidate, `None` when the label does not
    /// resolve against the catalog
    pub fn nutrition_for_detection(&self, detection: &Detection) -> Option<FoodItemNutrition> {
        let Some(record) = self.catalog.resolve(&detection.label) else {
            tracing::warn!(label = %detection.label, "no nutrition data for detected food");
            return None;
        };

        let estimated_weight = estimate_portion_weight(detection, record);
        let weight_factor = f64::from(estimated_weight) / 100.0;

        let calories = (record.calories_per_100g * weight_factor).round() as u32;
        let macros = &record.macros_per_100g;
        let macronutrients = Macronutrients {
            proteins: round1(macros.proteins * weight_factor),
            carbohydrates: round1(macros.carbohydrates * weight_factor),
            fats: round1(macros.fats * weight_factor),
            fiber: round1(macros.fiber * weight_factor),
        };

        Some(FoodItemNutrition {
            name: record.display_name.clone(),
            original_name: detection.label.clone(),
            category: record.category.clone(),
            confidence: detection.confidence,
            estimated_weight,
            calories,
            macronutrients,
            nutrition_per_100g: NutritionFacts {
                calories: record.calories_per_100g,
                macronutrients: record.macros_per_100g.clone(),
            },
        })
    }

    /// Estimate and aggregate nutrition for a list of food candidates
    ///
    /// Unresolvable candidates are counted as not found and excluded from the
    /// totals. An empty candidate list yields a zero-valued report.
    pub fn estimate_nutrition(&self, candidates: &[Detection]) -> NutritionReport {
        let mut detected_foods = Vec::new();
        let mut foods_not_found = 0usize;

        for candidate in candidates {
            match self.nutrition_for_detection(candidate) {
                Some(item) => detected_foods.push(item),
                None => foods_not_found += 1,
            }
        }

        let total_calories: u32 = detected_foods.iter().map(|item| item.calories).sum();

        let mut totals = Macronutrients::default();
        for item in &detected_foods {
            totals.proteins += item.macronutrients.proteins;
            totals.carbohydrates += item.macronutrients.carbohydrates;
            totals.fats += item.macronutrients.fats;
            totals.fiber += item.macronutrients.fiber;
        }
        let totals = Macronutrients {
            proteins: round1(totals.proteins),
            carbohydrates: round1(totals.carbohydrates),
            fats: round1(totals.fats),
            fiber: round1(totals.fiber),
        };

        let average_confidence = if detected_foods.is_empty() {
            0.0
        } else {
            let sum: f64 = detected_foods.iter().map(|item| item.confidence).sum();
            round2(sum / detected_foods.len() as f64)
        };

        let summary = AnalysisSummary {
            total_foods_detected: candidates.len(),
            foods_processed: detected_foods.len(),
            foods_not_found,
            average_confidence,
        };

        NutritionReport {
            total_calories,
            macro_distribution: macro_distribution(&totals),
            macronutrients: totals,
            detected_foods,
            summary,
            estimation_note: ESTIMATION_NOTE.to_string(),
        }
    }

    /// Catalog-browsing view of one food, scaled to its typical portion
    /// weight rather than to any detected weight
    pub fn food_nutrition_info(&self, name: &str) -> Option<FoodInfo> {
        let record = self.catalog.resolve(name)?;
        let portion = record.typical_portion_grams;
        let macros = &record.macros_per_100g;

        Some(FoodInfo {
            name: record.display_name.clone(),
            category: record.category.clone(),
            typical_portion_grams: portion,
            nutrition_per_100g: NutritionFacts {
                calories: record.calories_per_100g,
                macronutrients: record.macros_per_100g.clone(),
            },
            nutrition_per_portion: PortionNutrition {
                calories: (record.calories_per_100g * portion / 100.0).round() as u32,
                macronutrients: Macronutrients {
                    proteins: round1(macros.proteins * portion / 100.0),
                    carbohydrates: round1(macros.carbohydrates * portion / 100.0),
                    fats: round1(macros.fats * portion / 100.0),
                    fiber: round1(macros.fiber * portion / 100.0),
                },
            },
            aliases: record.aliases.clone(),
        })
    }
}

/// Percentage share of proteins/carbohydrates/fats among their rounded totals
///
/// Percentages round independently; their sum may land at 99 or 101. A zero
/// macro total yields all-zero percentages.
fn macro_distribution(totals: &Macronutrients) -> MacroDistribution {
    let total = totals.energy_macro_total();
    if total > 0.0 {
        MacroDistribution {
            proteins: ((totals.proteins / total) * 100.0).round() as u32,
            carbohydrates: ((totals.carbohydrates / total) * 100.0).round() as u32,
            fats: ((totals.fats / total) * 100.0).round() as u32,
        }
    } else {
        MacroDistribution::default()
    }
}
