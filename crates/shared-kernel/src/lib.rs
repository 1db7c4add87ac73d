// crates/shared-kernel/src/lib.rs
pub use error::{
    ErrorContext, InfraResult, InfrastructureError, LineSorterError, PresentationError,
    PresentationResult, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{Category, LineCount};
