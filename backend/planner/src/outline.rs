use tracing::info;

use deckforge_core::{schema, DeckError, StructureRecord};

use crate::client::StructuredClient;
use crate::prompts;

/// Plans the presentation outline: one structured request that decides the
/// deck title, the sections, and per-section slide targets.
#[derive(Clone)]
pub struct OutlinePlanner {
    client: StructuredClient,
}

impl OutlinePlanner {
    pub fn new(client: StructuredClient) -> Self {
        Self { client }
    }

    /// Produce the outline for `report` under the user's `requirements`.
    ///
    /// An outline with no sections is rejected: downstream fan-out and
    /// divider numbering both assume at least one section.
    pub async fn plan(
        &self,
        requirements: &str,
        report: &str,
    ) -> Result<StructureRecord, DeckError> {
        let report = self.client.clip_report(report);
        let structure: StructureRecord = self
            .client
            .generate(
                "outline",
                prompts::OUTLINE_SYSTEM_PROMPT,
                prompts::outline_user_prompt(requirements, report),
                schema::structure_format(),
            )
            .await?;

        if structure.sections.is_empty() {
            return Err(DeckError::EmptyOutline);
        }

        info!(
            title = %structure.title,
            sections = structure.sections.len(),
            target_slides = structure.num_total_slides,
            "Outline planned"
        );
        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GenerationOptions;
    use crate::providers::MockProvider;
    use std::sync::Arc;
    use std::time::Duration;

    fn planner_with(provider: MockProvider) -> OutlinePlanner {
        let mut options = GenerationOptions::new("mock-model");
        options.retry.base_delay = Duration::from_millis(1);
        OutlinePlanner::new(StructuredClient::new(Arc::new(provider), options))
    }

    #[tokio::test]
    async fn plan_parses_outline() {
        let json = serde_json::json!({
            "title": "Deck",
            "description": "About things",
            "num_total_slides": 6,
            "sections": [
                { "title": "Intro", "description": "why", "num_slides": 2 },
                { "title": "Body", "description": "what", "num_slides": 4 }
            ]
        })
        .to_string();

        let planner = planner_with(MockProvider::new("mock").with_response(json));
        let outline = planner.plan("make it short", "the report").await.unwrap();
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.sections[1].title, "Body");
    }

    #[tokio::test]
    async fn empty_outline_is_rejected() {
        let json = serde_json::json!({
            "title": "Deck",
            "description": "",
            "num_total_slides": 0,
            "sections": []
        })
        .to_string();

        let planner = planner_with(MockProvider::new("mock").with_response(json));
        let err = planner.plan("r", "report").await.unwrap_err();
        assert!(matches!(err, DeckError::EmptyOutline));
    }

    #[tokio::test]
    async fn malformed_outline_surfaces_after_retry() {
        let provider = MockProvider::new("mock").with_response("{\"title\": 3}");
        let planner = planner_with(provider);
        let err = planner.plan("r", "report").await.unwrap_err();
        assert!(matches!(err, DeckError::MalformedResponse { .. }));
    }
}
