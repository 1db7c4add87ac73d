// crates/infra/src/persistence/file_reader.rs
use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use line_sorter_ports::LineSource;
use line_sorter_shared_kernel::{InfraResult, InfrastructureError};

/// Reads input files from the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }
}

impl LineSource for FileReader {
    fn for_each_line(&self, path: &Path, on_line: &mut dyn FnMut(&str)) -> InfraResult<()> {
        let mut reader =
            Self::open_buffered(path).map_err(|e| InfrastructureError::read(path, e))?;
        log::debug!("reading {}", path.display());

        let mut buf = Vec::new();
        let mut lines = 0usize;
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| InfrastructureError::read(path, e))?;
            if n == 0 {
                break;
            }
            let content = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let line: Cow<'_, str> = String::from_utf8_lossy(content);
            on_line(&line);
            lines += 1;
        }

        log::debug!("read {lines} lines from {}", path.display());
        Ok(())
    }
}
