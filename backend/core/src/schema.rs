//! JSON Schemas declared to providers for constrained decoding.
//!
//! These mirror the serde shapes in [`crate::types`]; the provider enforces
//! them, the caller still re-parses defensively.

use crate::traits::ResponseFormat;
use serde_json::json;

/// Response format for the planner's outline request.
pub fn structure_format() -> ResponseFormat {
    ResponseFormat {
        name: "presentation_structure".to_string(),
        schema: json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "description": { "type": "string" },
                "num_total_slides": { "type": "integer", "minimum": 0 },
                "sections": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "description": { "type": "string" },
                            "num_slides": { "type": "integer", "minimum": 0 }
                        },
                        "required": ["title", "description", "num_slides"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["title", "description", "num_total_slides", "sections"],
            "additionalProperties": false
        }),
    }
}

/// Response format for a section-expansion request. The model returns a
/// presentation fragment; only its `slides` field is consumed.
pub fn presentation_format() -> ResponseFormat {
    ResponseFormat {
        name: "presentation_slides".to_string(),
        schema: json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "slides": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "content": { "type": "string" },
                            "note": { "type": ["string", "null"] }
                        },
                        "required": ["title", "content"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["title", "slides"],
            "additionalProperties": false
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PresentationRecord, StructureRecord};

    #[test]
    fn structure_schema_matches_serde_shape() {
        let sample = serde_json::json!({
            "title": "T",
            "description": "D",
            "num_total_slides": 10,
            "sections": [
                { "title": "S1", "description": "d1", "num_slides": 3 }
            ]
        });
        let parsed: StructureRecord = serde_json::from_value(sample).unwrap();
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(structure_format().name, "presentation_structure");
    }

    #[test]
    fn presentation_schema_allows_missing_note() {
        let sample = serde_json::json!({
            "title": "T",
            "slides": [ { "title": "s", "content": "c" } ]
        });
        let parsed: PresentationRecord = serde_json::from_value(sample).unwrap();
        assert!(parsed.slides[0].note.is_none());
    }
}
