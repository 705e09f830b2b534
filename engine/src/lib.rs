//! AI Calorie Counter analysis engine
//!
//! Turns raw object/label detections from an external image-recognition
//! service into a structured nutritional estimate: identified food items,
//! inferred portion weights, per-item macro/calorie breakdown and an
//! aggregate report.
//!
//! The pipeline is purely functional over its inputs. The only shared state
//! is the read-only [`FoodCatalog`], loaded once and safe for unlimited
//! concurrent readers; invoking the recognizer, handling its transport
//! errors and rendering the resulting report are the caller's concern.

pub mod error;
pub mod services;

pub use error::{EngineError, EngineResult};
pub use services::{
    CandidateFilter, FoodAnalysis, FoodAnalysisService, FoodCatalog, NutritionService,
};
pub use services::nutrition::{estimate_portion_weight, ESTIMATION_NOTE};
