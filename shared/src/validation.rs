//! Validation utilities for the AI Calorie Counter analysis core

use crate::models::{Detection, FoodRecord};

/// Validate a recognizer confidence score is a probability in [0,1]
pub fn validate_confidence(confidence: f64) -> Result<(), &'static str> {
    if !confidence.is_finite() {
        return Err("Confidence must be a finite number");
    }
    if !(0.0..=1.0).contains(&confidence) {
        return Err("Confidence must be between 0 and 1");
    }
    Ok(())
}

/// Validate a raw detection before it enters the pipeline
pub fn validate_detection(detection: &Detection) -> Result<(), &'static str> {
    if detection.label.trim().is_empty() {
        return Err("Detection label is required");
    }
    validate_confidence(detection.confidence)
}

/// Validate a catalog food record
pub fn validate_food_record(record: &FoodRecord) -> Result<(), &'static str> {
    if record.key.trim().is_empty() {
        return Err("Food key is required");
    }
    if record.display_name.trim().is_empty() {
        return Err("Food display name is required");
    }
    if record.calories_per_100g < 0.0 {
        return Err("Calories per 100g cannot be negative");
    }
    let macros = &record.macros_per_100g;
    if macros.proteins < 0.0
        || macros.carbohydrates < 0.0
        || macros.fats < 0.0
        || macros.fiber < 0.0
    {
        return Err("Macronutrient amounts cannot be negative");
    }
    if record.typical_portion_grams <= 0.0 {
        return Err("Typical portion weight must be positive");
    }
    // The key must resolve like any other alias of the record.
    if !record
        .aliases
        .iter()
        .any(|alias| alias.to_lowercase() == record.key.to_lowercase())
    {
        return Err("Food key must appear among its aliases");
    }
    Ok(())
}
