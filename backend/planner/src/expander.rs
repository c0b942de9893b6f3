use tracing::debug;

use deckforge_core::{schema, DeckError, PresentationRecord, SectionRecord, SlideRecord};

use crate::client::StructuredClient;
use crate::prompts;

/// Expands one outline section into concrete slides.
///
/// The model answers with a presentation fragment; only its `slides` field
/// is kept. `section.num_slides` is an advisory target passed through in
/// the prompt, never enforced on the output.
#[derive(Clone)]
pub struct SectionExpander {
    client: StructuredClient,
}

impl SectionExpander {
    pub fn new(client: StructuredClient) -> Self {
        Self { client }
    }

    pub async fn expand(
        &self,
        requirements: &str,
        report: &str,
        section: &SectionRecord,
    ) -> Result<Vec<SlideRecord>, DeckError> {
        let report = self.client.clip_report(report);
        let fragment: PresentationRecord = self
            .client
            .generate(
                "section",
                prompts::SECTION_SYSTEM_PROMPT,
                prompts::section_user_prompt(requirements, report, section),
                schema::presentation_format(),
            )
            .await?;

        if fragment.slides.len() as u32 != section.num_slides {
            debug!(
                section = %section.title,
                target = section.num_slides,
                produced = fragment.slides.len(),
                "Section slide count differs from target"
            );
        }
        Ok(fragment.slides)
    }
}
