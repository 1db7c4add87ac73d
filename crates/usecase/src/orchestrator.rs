// crates/usecase/src/orchestrator.rs
use std::path::{Path, PathBuf};

use line_sorter_domain::ClassifiedLines;
use line_sorter_ports::{CategorySink, LineSource};
use line_sorter_shared_kernel::{Category, ErrorContext, InfrastructureError, LineCount, Result};

/// Outcome of writing one category's output file.
#[derive(Debug)]
pub struct WriteOutcome {
    pub category: Category,
    pub result: Result<PathBuf>,
}

/// Everything a run produced: the classified lines plus per-file failures.
#[derive(Debug, Default)]
pub struct SortOutput {
    pub lines: ClassifiedLines,
    pub read_errors: Vec<InfrastructureError>,
    pub writes: Vec<WriteOutcome>,
}

pub struct SortLines<'a> {
    source: &'a dyn LineSource,
    sink: &'a dyn CategorySink,
}

impl<'a> SortLines<'a> {
    pub fn new(source: &'a dyn LineSource, sink: &'a dyn CategorySink) -> Self {
        Self { source, sink }
    }

    /// Classify all inputs, then write each non-empty category.
    pub fn run<P: AsRef<Path>>(&self, inputs: &[P]) -> SortOutput {
        let (lines, read_errors) = self.classify_inputs(inputs);
        let writes = self.write_outputs(&lines);
        SortOutput { lines, read_errors, writes }
    }

    /// Read inputs in order and classify their lines.
    ///
    /// A file that cannot be opened or read is recorded and skipped; lines
    /// read from it before the failure are kept.
    pub fn classify_inputs<P: AsRef<Path>>(
        &self,
        inputs: &[P],
    ) -> (ClassifiedLines, Vec<InfrastructureError>) {
        let mut lines = ClassifiedLines::new();
        let mut errors = Vec::new();

        for input in inputs {
            let path = input.as_ref();
            let mut accepted = LineCount::zero();
            let result = self.source.for_each_line(path, &mut |raw: &str| {
                if lines.push_line(raw).is_some() {
                    accepted += 1usize;
                }
            });
            log::debug!("{}: {accepted} non-empty line(s) classified", path.display());

            if let Err(e) = result {
                log::debug!("skipping rest of {}: {e}", path.display());
                errors.push(e);
            }
        }

        (lines, errors)
    }

    /// Write every non-empty category in the fixed category order.
    pub fn write_outputs(&self, lines: &ClassifiedLines) -> Vec<WriteOutcome> {
        Category::ALL
            .into_iter()
            .filter(|&category| !lines.count(category).is_zero())
            .map(|category| {
                let texts = lines.texts(category);
                let result = self
                    .sink
                    .write_category(category, &texts)
                    .with_context(|| format!("{category} output"));
                WriteOutcome { category, result }
            })
            .collect()
    }
}
