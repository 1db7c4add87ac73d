// crates/ports/src/output.rs
use std::path::PathBuf;

use line_sorter_shared_kernel::{Category, InfraResult};

/// Port for persisting the lines of one category.
pub trait CategorySink {
    /// Write `lines` as the output of `category`, returning the absolute
    /// path of the file written.
    fn write_category(&self, category: Category, lines: &[&str]) -> InfraResult<PathBuf>;
}
