//! Slide assembly: turns a [`PresentationRecord`] into a renderable deck.

use serde::{Deserialize, Serialize};

use deckforge_core::PresentationRecord;

use crate::markdown::render_markdown;
use crate::text::TextFrame;

/// Layout role of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Title,
    Content,
}

/// One fully rendered slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub kind: SlideKind,
    pub title: String,
    pub body: TextFrame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A rendered deck ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<Slide>,
}

/// Build a deck: one title slide, then one content slide per record with
/// its body rendered through the markdown-subset renderer.
pub fn assemble(presentation: &PresentationRecord) -> Deck {
    let mut slides = Vec::with_capacity(presentation.slides.len() + 1);

    slides.push(Slide {
        kind: SlideKind::Title,
        title: presentation.title.clone(),
        body: TextFrame::new(),
        notes: None,
    });

    for record in &presentation.slides {
        let mut body = TextFrame::new();
        render_markdown(&mut body, &record.content);
        slides.push(Slide {
            kind: SlideKind::Content,
            title: record.title.clone(),
            body,
            notes: record.note.clone(),
        });
    }

    Deck {
        title: presentation.title.clone(),
        slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckforge_core::SlideRecord;

    #[test]
    fn deck_has_title_slide_plus_one_per_record() {
        let presentation = PresentationRecord {
            title: "Quarterly Review".to_string(),
            slides: vec![
                SlideRecord::new("Intro", "- hello"),
                SlideRecord::new("Numbers", "# Revenue").with_note("speak slowly"),
            ],
        };

        let deck = assemble(&presentation);
        assert_eq!(deck.slides.len(), 3);
        assert_eq!(deck.slides[0].kind, SlideKind::Title);
        assert_eq!(deck.slides[0].title, "Quarterly Review");
        assert!(deck.slides[0].body.paragraphs.is_empty());

        assert_eq!(deck.slides[1].kind, SlideKind::Content);
        assert!(deck.slides[1].body.paragraphs[0].bullet);
        assert_eq!(deck.slides[1].notes, None);

        assert_eq!(deck.slides[2].notes.as_deref(), Some("speak slowly"));
        assert!(deck.slides[2].body.paragraphs[0].bold);
    }
}
