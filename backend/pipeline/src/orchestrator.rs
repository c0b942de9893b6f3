use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use deckforge_core::{DeckError, PresentationRecord, SlideRecord, StructureRecord};
use deckforge_deck::{assemble, derive_filename, DeckWriter};
use deckforge_planner::{OutlinePlanner, SectionExpander};

/// Speaker note attached to every divider slide.
const DIVIDER_NOTE: &str = "This is a section overview slide.";

/// Drives one build: plan → concurrent section expansion → divider
/// interleaving → assembly → write.
pub struct Orchestrator {
    planner: OutlinePlanner,
    expander: SectionExpander,
    writer: Box<dyn DeckWriter>,
    output_dir: PathBuf,
}

impl Orchestrator {
    pub fn new(
        planner: OutlinePlanner,
        expander: SectionExpander,
        writer: Box<dyn DeckWriter>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            planner,
            expander,
            writer,
            output_dir: output_dir.into(),
        }
    }

    /// Build a deck from `report` under `requirements` and persist it.
    ///
    /// All-or-nothing: the first section failure fails the whole build and
    /// discards completed sibling results. The final slide order depends
    /// only on section index, never on expansion completion order.
    pub async fn build(
        &self,
        requirements: &str,
        report: &str,
        destination: Option<&Path>,
    ) -> Result<PathBuf, DeckError> {
        let structure = self.planner.plan(requirements, report).await?;
        let section_slides = self.expand_all(requirements, report, &structure).await?;

        let mut slides = Vec::new();
        for (i, (section, generated)) in structure
            .sections
            .iter()
            .zip(section_slides)
            .enumerate()
        {
            slides.push(
                SlideRecord::new(
                    format!("{}: {}", i + 1, section.title),
                    section.description.clone(),
                )
                .with_note(DIVIDER_NOTE),
            );
            slides.extend(generated);
        }

        let presentation = PresentationRecord {
            title: structure.title,
            slides,
        };

        let path = match destination {
            Some(path) => path.to_path_buf(),
            None => self
                .output_dir
                .join(derive_filename(&presentation.title, self.writer.extension())),
        };

        let deck = assemble(&presentation);
        self.writer.save(&deck, &path)?;
        info!(
            path = %path.display(),
            slides = deck.slides.len(),
            "Presentation built"
        );
        Ok(path)
    }

    /// Fan out one expansion task per section and join results by section
    /// index. Dropping the `JoinSet` on the first failure aborts the
    /// remaining tasks.
    async fn expand_all(
        &self,
        requirements: &str,
        report: &str,
        structure: &StructureRecord,
    ) -> Result<Vec<Vec<SlideRecord>>, DeckError> {
        let requirements: Arc<str> = requirements.into();
        let report: Arc<str> = report.into();

        info!(sections = structure.sections.len(), "Expanding sections");

        let mut join_set = JoinSet::new();
        for (index, section) in structure.sections.iter().cloned().enumerate() {
            let expander = self.expander.clone();
            let requirements = Arc::clone(&requirements);
            let report = Arc::clone(&report);
            join_set.spawn(async move {
                debug!(index, section = %section.title, "Expanding section");
                let result = expander.expand(&requirements, &report, &section).await;
                (index, section.title, result)
            });
        }

        let mut results: Vec<Option<Vec<SlideRecord>>> = Vec::new();
        results.resize_with(structure.sections.len(), || None);

        while let Some(joined) = join_set.join_next().await {
            let (index, title, result) =
                joined.map_err(|e| DeckError::Other(anyhow::anyhow!("expansion task failed: {e}")))?;
            match result {
                Ok(slides) => {
                    debug!(index, slides = slides.len(), "Section expanded");
                    results[index] = Some(slides);
                }
                Err(e) => {
                    error!(index, section = %title, error = %e, "Section expansion failed");
                    return Err(DeckError::section(index + 1, title, e));
                }
            }
        }

        // Every task reported exactly once, so every slot is filled.
        Ok(results.into_iter().map(|slot| slot.unwrap_or_default()).collect())
    }
}
