//! End-to-end analysis pipeline: filter, resolve, estimate

use std::sync::Arc;

use serde::Serialize;
use shared::{Detection, LabelAnnotation, NutritionReport, ObjectAnnotation};

use crate::services::candidate_filter::CandidateFilter;
use crate::services::catalog::FoodCatalog;
use crate::services::nutrition::NutritionService;

/// Outcome of one analysis call
///
/// The report is always present; when no candidate survives the filter it is
/// zero-valued and the caller decides how to message "no food detected".
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    /// Detections that survived the food-relevance filter, best first
    pub candidates: Vec<Detection>,
    pub report: NutritionReport,
}

/// Composes the candidate filter and the nutrition estimator
#[derive(Clone)]
pub struct FoodAnalysisService {
    filter: CandidateFilter,
    nutrition: NutritionService,
}

impl FoodAnalysisService {
    /// Create a new FoodAnalysisService over the given catalog
    pub fn new(catalog: Arc<FoodCatalog>) -> Self {
        Self {
            filter: CandidateFilter::new(),
            nutrition: NutritionService::new(catalog),
        }
    }

    /// Service backed by the bundled reference catalog
    pub fn with_builtin_catalog() -> Self {
        Self::new(FoodCatalog::builtin())
    }

    /// Run the full pipeline over already-converted detections
    pub fn analyze(&self, objects: &[Detection], labels: &[Detection]) -> FoodAnalysis {
        let candidates = self.filter.filter_food_candidates(objects, labels);
        if candidates.is_empty() {
            tracing::debug!("no food candidates above confidence thresholds");
        }
        let report = self.nutrition.estimate_nutrition(&candidates);
        FoodAnalysis { candidates, report }
    }

    /// Run the full pipeline over raw recognizer annotations
    pub fn analyze_annotations(
        &self,
        objects: Vec<ObjectAnnotation>,
        labels: Vec<LabelAnnotation>,
    ) -> FoodAnalysis {
        let objects: Vec<Detection> = objects.into_iter().map(Detection::from).collect();
        let labels: Vec<Detection> = labels.into_iter().map(Detection::from).collect();
        self.analyze(&objects, &labels)
    }
}
