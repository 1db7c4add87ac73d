// crates/infra/src/lib.rs
pub mod persistence;

pub use persistence::{FileReader, FileWriter, OutputTarget};
