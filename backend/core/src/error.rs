use thiserror::Error;

/// Top-level error type for the Deckforge pipeline.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("malformed model response in {stage}: {message}")]
    MalformedResponse { stage: String, message: String },

    #[error("provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("section {index} (\"{title}\") failed: {source}")]
    SectionFailed {
        index: usize,
        title: String,
        #[source]
        source: Box<DeckError>,
    },

    #[error("planner returned an outline with no sections")]
    EmptyOutline,

    #[error("failed to write deck: {0}")]
    WriteFailure(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Wrap a failure that occurred while expanding one section.
    pub fn section(index: usize, title: impl Into<String>, source: DeckError) -> Self {
        DeckError::SectionFailed {
            index,
            title: title.into(),
            source: Box::new(source),
        }
    }
}
