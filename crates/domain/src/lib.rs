// crates/domain/src/lib.rs
pub mod analytics;
pub mod classifier;
pub mod model;

pub use analytics::Summary;
pub use classifier::{Classification, classify};
pub use model::ClassifiedLines;
