pub mod entities;

pub use entities::{ClassifiedLines, NumericLine};
