// src/app.rs
use crate::config::Config;
use line_sorter_infra::{FileReader, FileWriter};
use line_sorter_usecase::{SortLines, SortOutput};

/// Classify the configured inputs and write the per-category files.
pub fn run(config: &Config) -> SortOutput {
    let writer = FileWriter::new(config.output_target());
    log::debug!("output target: {:?}", writer.target());
    SortLines::new(&FileReader, &writer).run(&config.inputs)
}
