//! End-to-end tests for the composed analysis pipeline

use engine::FoodAnalysisService;
use shared::{
    BoundingBox, Detection, DetectionSource, LabelAnnotation, NormalizedVertex, ObjectAnnotation,
};

fn banana_box() -> BoundingBox {
    // 0.5 x 0.4 of the frame, a normal-sized portion
    BoundingBox {
        normalized_vertices: vec![
            NormalizedVertex { x: 0.2, y: 0.3 },
            NormalizedVertex { x: 0.7, y: 0.3 },
            NormalizedVertex { x: 0.7, y: 0.7 },
            NormalizedVertex { x: 0.2, y: 0.7 },
        ],
    }
}

// =============================================================================
// Pipeline Tests
// =============================================================================

mod pipeline {
    use super::*;

    #[test]
    fn filters_resolves_and_aggregates() {
        let service = FoodAnalysisService::with_builtin_catalog();

        let objects = vec![
            Detection::object("Banana".to_string(), 0.9, Some(banana_box())),
            Detection::object("Car".to_string(), 0.95, None),
        ];
        let labels = vec![
            Detection::label("Fruit".to_string(), 0.85),
            Detection::label("banana".to_string(), 0.8),
        ];

        let analysis = service.analyze(&objects, &labels);

        // Car is irrelevant, the duplicate banana label collapses into the
        // object, Fruit survives the filter but has no catalog entry
        assert_eq!(analysis.candidates.len(), 2);
        assert_eq!(analysis.candidates[0].label, "Banana");
        assert_eq!(analysis.candidates[0].source, DetectionSource::Object);
        assert_eq!(analysis.candidates[1].label, "Fruit");

        let report = &analysis.report;
        assert_eq!(report.summary.total_foods_detected, 2);
        assert_eq!(report.summary.foods_processed, 1);
        assert_eq!(report.summary.foods_not_found, 1);

        // banana at 0.9 confidence with a normal-sized box: 108 g, 96 kcal
        let banana = &report.detected_foods[0];
        assert_eq!(banana.name, "Plátano");
        assert_eq!(banana.estimated_weight, 108);
        assert_eq!(report.total_calories, 96);
    }

    #[test]
    fn no_food_detected_yields_zero_report() {
        let service = FoodAnalysisService::with_builtin_catalog();
        let analysis = service.analyze(
            &[Detection::object("Laptop".to_string(), 0.98, None)],
            &[Detection::label("Electronics".to_string(), 0.95)],
        );

        assert!(analysis.candidates.is_empty());
        assert_eq!(analysis.report.total_calories, 0);
        assert_eq!(analysis.report.summary.total_foods_detected, 0);
    }

    #[test]
    fn analysis_is_idempotent() {
        let service = FoodAnalysisService::with_builtin_catalog();
        let objects = vec![Detection::object(
            "Apple".to_string(),
            0.87,
            Some(banana_box()),
        )];
        let labels = vec![Detection::label("Comida".to_string(), 0.9)];

        let first = service.analyze(&objects, &labels);
        let second = service.analyze(&objects, &labels);
        assert_eq!(first, second);
    }
}

// =============================================================================
// Annotation Conversion Tests
// =============================================================================

mod annotations {
    use super::*;

    #[test]
    fn raw_annotations_run_through_the_pipeline() {
        let service = FoodAnalysisService::with_builtin_catalog();

        let objects = vec![ObjectAnnotation {
            name: "Apple".to_string(),
            confidence: 0.92,
            bounding_box: Some(banana_box()),
        }];
        let labels = vec![LabelAnnotation {
            description: "Comida".to_string(),
            confidence: 0.9,
            topicality: Some(0.88),
        }];

        let analysis = service.analyze_annotations(objects, labels);

        assert_eq!(analysis.candidates.len(), 2);
        // label candidates keep their topicality through the conversion
        let comida = analysis
            .candidates
            .iter()
            .find(|c| c.label == "Comida")
            .unwrap();
        assert_eq!(comida.topicality, Some(0.88));

        // "Comida" is food-relevant but not a catalog entry
        assert_eq!(analysis.report.summary.foods_processed, 1);
        assert_eq!(analysis.report.summary.foods_not_found, 1);
    }

    #[test]
    fn empty_annotations_yield_zero_report() {
        let service = FoodAnalysisService::with_builtin_catalog();
        let analysis = service.analyze_annotations(vec![], vec![]);

        assert!(analysis.candidates.is_empty());
        assert_eq!(analysis.report.total_calories, 0);
    }
}
