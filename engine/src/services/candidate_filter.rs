//! Food-relevance filtering of raw recognizer detections

use shared::Detection;

/// Confidence floor for object detections
const OBJECT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Confidence floor for label detections
///
/// Higher than the object floor: whole-image labels are noisier and more
/// generic than localized objects.
const LABEL_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Keywords used to decide food relevance (not identity), English and Spanish
pub const FOOD_KEYWORDS: &[&str] = &[
    "food", "fruit", "vegetable", "meat", "bread", "pasta", "rice", "chicken",
    "beef", "fish", "apple", "banana", "orange", "tomato", "potato", "carrot",
    "salad", "sandwich", "pizza", "burger", "cake", "cookie", "cheese",
    "milk", "egg", "yogurt", "cereal", "soup", "noodle", "taco", "burrito",
    "comida", "fruta", "verdura", "carne", "pan", "pollo", "pescado",
    "manzana", "plátano", "naranja", "tomate", "papa", "zanahoria",
    "ensalada", "sándwich", "hamburguesa", "pastel", "queso", "leche",
    "huevo", "yogur", "cereal", "sopa", "fideos",
];

/// Filters raw detections down to ranked food candidates
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    keywords: Vec<String>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateFilter {
    /// Filter with the builtin bilingual keyword set
    pub fn new() -> Self {
        Self::with_keywords(FOOD_KEYWORDS.iter().map(|k| k.to_string()))
    }

    /// Filter with a custom keyword set
    pub fn with_keywords(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn is_food_related(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.keywords.iter().any(|keyword| label.contains(keyword))
    }

    /// Select the food candidates among raw object and label detections
    ///
    /// Objects are kept above a 0.5 confidence floor, labels above 0.7, and
    /// both only when their text contains a relevance keyword. A label whose
    /// name matches an already-kept candidate (case-insensitive) is dropped;
    /// objects are processed first, so detections that carry geometry win.
    /// Survivors are ordered by descending confidence, ties keeping input
    /// order. Empty output is a valid "no food detected" outcome, not an
    /// error.
    pub fn filter_food_candidates(
        &self,
        objects: &[Detection],
        labels: &[Detection],
    ) -> Vec<Detection> {
        let mut candidates: Vec<Detection> = Vec::new();

        for object in objects {
            if object.confidence > OBJECT_CONFIDENCE_THRESHOLD && self.is_food_related(&object.label)
            {
                candidates.push(object.clone());
            } else {
                tracing::debug!(
                    label = %object.label,
                    confidence = object.confidence,
                    "object detection discarded"
                );
            }
        }

        for detection in labels {
            if detection.confidence > LABEL_CONFIDENCE_THRESHOLD
                && self.is_food_related(&detection.label)
            {
                let duplicate = candidates
                    .iter()
                    .any(|c| c.label.to_lowercase() == detection.label.to_lowercase());
                if !duplicate {
                    candidates.push(detection.clone());
                }
            }
        }

        // stable sort keeps input order on equal confidence
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        candidates
    }
}
