//! Outline planning and section expansion.
//!
//! Both stages issue structured-generation requests through a shared
//! [`client::StructuredClient`], which owns the truncation, timeout, and
//! retry policies.

pub mod client;
pub mod expander;
pub mod outline;
pub mod prompts;
pub mod providers;

pub use client::{GenerationOptions, RetryPolicy, StructuredClient};
pub use expander::SectionExpander;
pub use outline::OutlinePlanner;
