//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`input`]: reading the lines of an input file
//! - [`output`]: writing a category's lines to its output file
//!
//! These ports allow the use case layer to remain independent of the
//! file system.

// crates/ports/src/lib.rs
pub mod input;
pub mod output;

pub use input::LineSource;
pub use output::CategorySink;
