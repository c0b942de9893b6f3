//! Deck persistence.
//!
//! The serialization format is a seam: the pipeline talks to [`DeckWriter`]
//! only, so a native presentation-file backend can be slotted in without
//! touching the orchestrator. The default writer emits pretty JSON.

use std::path::{Path, PathBuf};

use tracing::info;

use deckforge_core::DeckError;

use crate::assembler::Deck;

/// Persists a rendered deck to disk.
pub trait DeckWriter: Send + Sync {
    /// File extension (without the dot) this writer produces.
    fn extension(&self) -> &str;

    /// Write `deck` to `path`.
    fn save(&self, deck: &Deck, path: &Path) -> Result<(), DeckError>;
}

/// Writer that serializes the deck model as pretty-printed JSON.
#[derive(Debug, Default)]
pub struct JsonDeckWriter;

impl DeckWriter for JsonDeckWriter {
    fn extension(&self) -> &str {
        "json"
    }

    fn save(&self, deck: &Deck, path: &Path) -> Result<(), DeckError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DeckError::WriteFailure(format!("{}: {e}", parent.display())))?;
            }
        }
        let json = serde_json::to_string_pretty(deck)
            .map_err(|e| DeckError::WriteFailure(e.to_string()))?;
        std::fs::write(path, json)
            .map_err(|e| DeckError::WriteFailure(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), slides = deck.slides.len(), "Deck written");
        Ok(())
    }
}

/// Derive a filename from a deck title: spaces and path separators become
/// underscores, with the writer's extension appended.
pub fn derive_filename(title: &str, extension: &str) -> PathBuf {
    let stem: String = title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    PathBuf::from(format!("{stem}.{extension}"))
}
