// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use line_sorter_ports::CategorySink;
use line_sorter_shared_kernel::{
    Category, InfraResult, InfrastructureError, path::logical_absolute,
};

/// Where category files go and how existing files are treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub dir: PathBuf,
    pub prefix: String,
    pub append: bool,
}

impl OutputTarget {
    /// `<dir>/<prefix><category>.txt`
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(category.file_name(&self.prefix))
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self { dir: PathBuf::from("."), prefix: String::new(), append: false }
    }
}

/// Writes category files to the local file system.
#[derive(Debug, Clone)]
pub struct FileWriter {
    target: OutputTarget,
}

impl FileWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Create a buffered writer targeting `path`, truncating it unless
    /// `append` is set. The file is created when missing.
    fn open<P: AsRef<Path>>(path: P, append: bool) -> std::io::Result<BufWriter<File>> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path.as_ref())
            .map(BufWriter::new)
    }

    fn write_lines(path: &Path, lines: &[&str], append: bool) -> std::io::Result<()> {
        let mut w = Self::open(path, append)?;
        for line in lines {
            writeln!(w, "{line}")?;
        }
        w.flush()
    }
}

impl CategorySink for FileWriter {
    fn write_category(&self, category: Category, lines: &[&str]) -> InfraResult<PathBuf> {
        let path = self.target.path_for(category);
        Self::write_lines(&path, lines, self.target.append)
            .map_err(|e| InfrastructureError::write(&path, e))?;

        log::info!(
            "wrote {} {category} line(s) to {} (append={})",
            lines.len(),
            path.display(),
            self.target.append
        );
        Ok(logical_absolute(&path))
    }
}
