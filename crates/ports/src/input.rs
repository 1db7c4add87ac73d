// crates/ports/src/input.rs
use std::path::Path;

use line_sorter_shared_kernel::InfraResult;

/// Port for reading an input file line by line.
pub trait LineSource {
    /// Feed every line of `path` to `on_line`, in file order.
    ///
    /// Lines delivered before a read error stay delivered; the error is
    /// returned once reading cannot continue.
    fn for_each_line(&self, path: &Path, on_line: &mut dyn FnMut(&str)) -> InfraResult<()>;
}
