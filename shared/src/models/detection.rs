//! Raw detections consumed from the image-recognition service

use serde::{Deserialize, Serialize};

/// Where a detection came from
///
/// Object detections are localized and may carry geometry; label detections
/// describe the whole image and never do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
    Object,
    Label,
}

/// A single normalized vertex of a bounding polygon
///
/// Coordinates are in [0,1] relative to the image frame. Recognizers omit
/// zero-valued coordinates, so both fields default to 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NormalizedVertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Bounding polygon of an object detection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    #[serde(default)]
    pub normalized_vertices: Vec<NormalizedVertex>,
}

impl BoundingBox {
    /// Approximate box area in normalized units, treating vertices 0, 1 and 2
    /// as the width/height corners of an axis-aligned box.
    ///
    /// Returns `None` when those vertices are not all present; callers must
    /// treat that as unusable geometry, not as an error.
    pub fn area(&self) -> Option<f64> {
        let v = &self.normalized_vertices;
        match (v.first(), v.get(1), v.get(2)) {
            (Some(v0), Some(v1), Some(v2)) => {
                let width = (v1.x - v0.x).abs();
                let height = (v2.y - v0.y).abs();
                Some(width * height)
            }
            _ => None,
        }
    }
}

/// One raw recognition-service result
///
/// Created fresh per analysis request and discarded afterwards; detections
/// are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub label: String,
    /// Recognizer confidence in [0,1]
    pub confidence: f64,
    pub source: DetectionSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topicality: Option<f64>,
}

impl Detection {
    /// Detection backed by an object localization result
    pub fn object(label: String, confidence: f64, bounding_box: Option<BoundingBox>) -> Self {
        Self {
            label,
            confidence,
            source: DetectionSource::Object,
            bounding_box,
            topicality: None,
        }
    }

    /// Detection backed by a whole-image label result
    pub fn label(label: String, confidence: f64) -> Self {
        Self {
            label,
            confidence,
            source: DetectionSource::Label,
            bounding_box: None,
            topicality: None,
        }
    }
}

/// Object localization entry as reported by the recognizer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectAnnotation {
    pub name: String,
    pub confidence: f64,
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
}

/// Whole-image label entry as reported by the recognizer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelAnnotation {
    pub description: String,
    pub confidence: f64,
    #[serde(default)]
    pub topicality: Option<f64>,
}

impl From<ObjectAnnotation> for Detection {
    fn from(a: ObjectAnnotation) -> Self {
        Detection {
            label: a.name,
            confidence: a.confidence,
            source: DetectionSource::Object,
            bounding_box: a.bounding_box,
            topicality: None,
        }
    }
}

impl From<LabelAnnotation> for Detection {
    fn from(a: LabelAnnotation) -> Self {
        Detection {
            label: a.description,
            confidence: a.confidence,
            source: DetectionSource::Label,
            bounding_box: None,
            topicality: a.topicality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_annotation_conversion() {
        let annotation = ObjectAnnotation {
            name: "Banana".to_string(),
            confidence: 0.92,
            bounding_box: Some(BoundingBox {
                normalized_vertices: vec![
                    NormalizedVertex { x: 0.1, y: 0.1 },
                    NormalizedVertex { x: 0.6, y: 0.1 },
                    NormalizedVertex { x: 0.6, y: 0.5 },
                    NormalizedVertex { x: 0.1, y: 0.5 },
                ],
            }),
        };

        let detection: Detection = annotation.into();
        assert_eq!(detection.label, "Banana");
        assert_eq!(detection.source, DetectionSource::Object);
        assert!(detection.bounding_box.is_some());
        assert!(detection.topicality.is_none());
    }

    #[test]
    fn label_annotation_conversion() {
        let annotation = LabelAnnotation {
            description: "Fruit".to_string(),
            confidence: 0.88,
            topicality: Some(0.85),
        };

        let detection: Detection = annotation.into();
        assert_eq!(detection.label, "Fruit");
        assert_eq!(detection.source, DetectionSource::Label);
        assert!(detection.bounding_box.is_none());
        assert_eq!(detection.topicality, Some(0.85));
    }

    #[test]
    fn object_annotation_parses_recognizer_json() {
        let json = r#"{
            "name": "Apple",
            "confidence": 0.87,
            "boundingBox": {
                "normalizedVertices": [
                    {"x": 0.2, "y": 0.3},
                    {"x": 0.7, "y": 0.3},
                    {"x": 0.7, "y": 0.8},
                    {"x": 0.2}
                ]
            }
        }"#;

        let annotation: ObjectAnnotation = serde_json::from_str(json).unwrap();
        assert_eq!(annotation.name, "Apple");
        let bb = annotation.bounding_box.unwrap();
        assert_eq!(bb.normalized_vertices.len(), 4);
        // omitted coordinate defaults to zero
        assert_eq!(bb.normalized_vertices[3].y, 0.0);
    }

    #[test]
    fn bounding_box_area() {
        let bb = BoundingBox {
            normalized_vertices: vec![
                NormalizedVertex { x: 0.1, y: 0.2 },
                NormalizedVertex { x: 0.5, y: 0.2 },
                NormalizedVertex { x: 0.5, y: 0.7 },
                NormalizedVertex { x: 0.1, y: 0.7 },
            ],
        };
        let area = bb.area().unwrap();
        assert!((area - 0.2).abs() < 1e-9);
    }

    #[test]
    fn bounding_box_area_requires_three_vertices() {
        let two_vertices = BoundingBox {
            normalized_vertices: vec![
                NormalizedVertex { x: 0.1, y: 0.2 },
                NormalizedVertex { x: 0.5, y: 0.7 },
            ],
        };
        assert!(two_vertices.area().is_none());
        assert!(BoundingBox::default().area().is_none());
    }

    #[test]
    fn detection_serializes_camel_case() {
        let detection = Detection::object(
            "Apple".to_string(),
            0.9,
            Some(BoundingBox {
                normalized_vertices: vec![NormalizedVertex { x: 0.0, y: 0.0 }],
            }),
        );

        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(json["source"], "object");
        assert!(json["boundingBox"]["normalizedVertices"].is_array());
        // labels-only field is omitted for objects
        assert!(json.get("topicality").is_none());
    }
}
