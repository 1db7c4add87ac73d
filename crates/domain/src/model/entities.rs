// crates/domain/src/model/entities.rs
use line_sorter_shared_kernel::{Category, LineCount};
use num_bigint::BigInt;

use crate::classifier::{self, Classification};

/// A numeric line: the trimmed text as read plus its parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLine<T> {
    pub text: String,
    pub value: T,
}

/// The three ordered line sequences produced by a run.
///
/// Lines keep their encounter order within each category and duplicates are
/// retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedLines {
    pub integers: Vec<NumericLine<BigInt>>,
    pub floats: Vec<NumericLine<f64>>,
    pub strings: Vec<String>,
}

impl ClassifiedLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `raw`, classify it and append it to its sequence.
    ///
    /// Returns `None` for lines that are empty after trimming; those are
    /// discarded.
    pub fn push_line(&mut self, raw: &str) -> Option<Category> {
        let line = classifier::trim_line(raw);
        if line.is_empty() {
            return None;
        }

        let text = line.to_owned();
        let classification = classifier::classify(line);
        let category = classification.category();
        match classification {
            Classification::Integer(value) => self.integers.push(NumericLine { text, value }),
            Classification::Float(value) => self.floats.push(NumericLine { text, value }),
            Classification::String => self.strings.push(text),
        }
        Some(category)
    }

    pub fn count(&self, category: Category) -> LineCount {
        LineCount::new(match category {
            Category::Integer => self.integers.len(),
            Category::Float => self.floats.len(),
            Category::String => self.strings.len(),
        })
    }

    pub fn total(&self) -> LineCount {
        Category::ALL.into_iter().map(|c| self.count(c)).sum()
    }

    /// Original text of every line in `category`, in encounter order.
    pub fn texts(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Integer => self.integers.iter().map(|l| l.text.as_str()).collect(),
            Category::Float => self.floats.iter().map(|l| l.text.as_str()).collect(),
            Category::String => self.strings.iter().map(String::as_str).collect(),
        }
    }
}

impl<'a> Extend<&'a str> for ClassifiedLines {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for line in iter {
            self.push_line(line);
        }
    }
}
