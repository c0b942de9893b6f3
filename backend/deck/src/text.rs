//! Styled-text model for slide bodies.
//!
//! A `TextFrame` is the mutable text region of one slide; the markdown
//! renderer appends paragraphs to it, each made of styled runs so link and
//! non-link spans can carry different formatting.

use serde::{Deserialize, Serialize};

/// Base font size for a level-1 heading, in points.
pub const HEADING_BASE_PT: u32 = 32;
/// Size decrease per heading level beyond 1, in points.
pub const HEADING_STEP_PT: u32 = 4;
/// Leading spaces per bullet indent level.
pub const INDENT_SPACES_PER_LEVEL: usize = 2;

/// One contiguous span of text with uniform styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
    #[serde(default)]
    pub underline: bool,
    /// Rendered in the theme accent color (used for links).
    #[serde(default)]
    pub accent: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hyperlink: Some(url.into()),
            underline: true,
            accent: true,
        }
    }
}

/// One paragraph in a text frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    #[serde(default)]
    pub bullet: bool,
    #[serde(default)]
    pub indent_level: u8,
    #[serde(default)]
    pub bold: bool,
    /// Explicit font size; `None` means the layout default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<u32>,
}

impl Paragraph {
    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// The body region of a slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }
}
