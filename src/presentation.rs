// src/presentation.rs
use crate::config::Config;
use line_sorter_domain::ClassifiedLines;
use line_sorter_domain::analytics::{FloatStats, IntegerStats, StringStats, Summary};
use line_sorter_shared_kernel::{Category, InfrastructureError};
use line_sorter_usecase::WriteOutcome;
use std::fmt::{self, Write};

pub fn print_read_errors(errors: &[InfrastructureError]) {
    for e in errors {
        eprintln!("{e}");
    }
}

/// Report each output file: its absolute path on success, the failure otherwise.
pub fn print_writes(writes: &[WriteOutcome]) {
    for w in writes {
        match &w.result {
            Ok(path) => println!("Written: {}", path.display()),
            Err(e) => eprintln!("{e}"),
        }
    }
}

pub fn print_stats(lines: &ClassifiedLines, config: &Config) {
    if config.wants_short_stats() {
        print!("{}", render_short_stats(lines));
    }
    if config.wants_full_stats() {
        print!("{}", render_full_stats(lines));
    }
}

pub fn render_short_stats(lines: &ClassifiedLines) -> String {
    render(|out| write_short_stats(out, lines))
}

pub fn render_full_stats(lines: &ClassifiedLines) -> String {
    render(|out| write_full_stats(out, lines))
}

fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    write(&mut out).expect("writing into a String cannot fail");
    out
}

fn write_short_stats(out: &mut impl Write, lines: &ClassifiedLines) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "Short statistics:")?;
    let counts: Vec<String> = Category::ALL
        .into_iter()
        .map(|c| format!("{}: {}", c.label(), lines.count(c)))
        .collect();
    writeln!(out, "{}", counts.join(", "))
}

fn write_full_stats(out: &mut impl Write, lines: &ClassifiedLines) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "Contents:")?;
    for category in Category::ALL {
        writeln!(out, "{}: {}", category.label(), preview(&lines.texts(category)))?;
    }

    let summary = Summary::from_lines(lines);
    if let Some(stats) = &summary.integers {
        write_integer_stats(out, stats)?;
    }
    if let Some(stats) = &summary.floats {
        write_float_stats(out, stats)?;
    }
    if let Some(stats) = &summary.strings {
        write_string_stats(out, stats)?;
    }
    Ok(())
}

fn write_integer_stats(out: &mut impl Write, stats: &IntegerStats) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "Integer statistics:")?;
    writeln!(out, "Min: {}", stats.min)?;
    writeln!(out, "Max: {}", stats.max)?;
    writeln!(out, "Sum: {}", stats.sum)?;
    writeln!(out, "Average: {:.5}", stats.average)
}

fn write_float_stats(out: &mut impl Write, stats: &FloatStats) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "Float statistics:")?;
    writeln!(out, "Min: {}", stats.min)?;
    writeln!(out, "Max: {}", stats.max)?;
    writeln!(out, "Sum: {:.5}", stats.sum)?;
    writeln!(out, "Average: {:.5}", stats.average)
}

fn write_string_stats(out: &mut impl Write, stats: &StringStats) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "String statistics:")?;
    writeln!(out, "Min length: {}", stats.min_len)?;
    writeln!(out, "Max length: {}", stats.max_len)
}

/// `[a, b, c]`
fn preview(texts: &[&str]) -> String {
    format!("[{}]", texts.join(", "))
}
