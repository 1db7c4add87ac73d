// crates/shared-kernel/src/value_objects/mod.rs
pub mod category;
pub mod counts;

pub use category::Category;
pub use counts::LineCount;
