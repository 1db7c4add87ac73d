//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: read every input, classify its lines and write the
//!   per-category output files
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

pub mod orchestrator;

pub use orchestrator::{SortLines, SortOutput, WriteOutcome};
