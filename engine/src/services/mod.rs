//! Business logic services for the analysis engine

pub mod analysis;
pub mod candidate_filter;
pub mod catalog;
pub mod nutrition;

pub use analysis::{FoodAnalysis, FoodAnalysisService};
pub use candidate_filter::CandidateFilter;
pub use catalog::FoodCatalog;
pub use nutrition::NutritionService;
