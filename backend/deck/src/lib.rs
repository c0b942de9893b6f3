//! Deck construction: markdown-subset rendering into styled runs, slide
//! assembly, and serialization to disk.

pub mod assembler;
pub mod markdown;
pub mod text;
pub mod writer;

pub use assembler::{assemble, Deck, Slide, SlideKind};
pub use markdown::render_markdown;
pub use text::{Paragraph, TextFrame, TextRun};
pub use writer::{derive_filename, DeckWriter, JsonDeckWriter};
