use serde::{Deserialize, Serialize};

/// One generated slide: a title, a markdown-subset body, and an optional
/// speaker note. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SlideRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A full presentation: title plus slides in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationRecord {
    pub title: String,
    pub slides: Vec<SlideRecord>,
}

/// One planned outline section. `num_slides` is an advisory target for the
/// expander's prompt; the model is not guaranteed to honor it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub title: String,
    pub description: String,
    pub num_slides: u32,
}

/// The planner's structured outline. Section order is presentation order
/// and is preserved end-to-end into the final slide list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRecord {
    pub title: String,
    pub description: String,
    pub num_total_slides: u32,
    pub sections: Vec<SectionRecord>,
}
