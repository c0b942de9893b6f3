//! Pipeline orchestration: outline once, expand sections concurrently,
//! interleave divider slides, assemble, and persist.

pub mod orchestrator;

pub use orchestrator::Orchestrator;
