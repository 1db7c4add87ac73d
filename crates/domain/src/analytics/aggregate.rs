// crates/domain/src/analytics/aggregate.rs
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::model::{ClassifiedLines, NumericLine};

/// Exact statistics over the integer sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerStats {
    pub min: BigInt,
    pub max: BigInt,
    pub sum: BigInt,
    /// `sum` converted to `f64`, divided by the number of lines.
    pub average: f64,
}

impl IntegerStats {
    pub fn from_lines(lines: &[NumericLine<BigInt>]) -> Option<Self> {
        let first = &lines.first()?.value;
        let mut min = first;
        let mut max = first;
        let mut sum = BigInt::zero();
        for line in lines {
            if line.value < *min {
                min = &line.value;
            }
            if line.value > *max {
                max = &line.value;
            }
            sum += &line.value;
        }

        let average = sum.to_f64().unwrap_or(f64::NAN) / lines.len() as f64;
        Some(Self { min: min.clone(), max: max.clone(), sum, average })
    }
}

/// Double-precision statistics over the float sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatStats {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub average: f64,
}

impl FloatStats {
    pub fn from_lines(lines: &[NumericLine<f64>]) -> Option<Self> {
        let values = || lines.iter().map(|l| l.value);
        let min = values().min_by(f64::total_cmp)?;
        let max = values().max_by(f64::total_cmp)?;
        let sum = values().fold(0.0, |acc, v| acc + v);
        Some(Self { min, max, sum, average: sum / lines.len() as f64 })
    }
}

/// Length bounds over the string sequence, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringStats {
    pub min_len: usize,
    pub max_len: usize,
}

impl StringStats {
    pub fn from_lines(lines: &[String]) -> Option<Self> {
        let lengths = || lines.iter().map(|s| s.chars().count());
        Some(Self { min_len: lengths().min()?, max_len: lengths().max()? })
    }
}

/// Per-category statistics; `None` for categories without lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub integers: Option<IntegerStats>,
    pub floats: Option<FloatStats>,
    pub strings: Option<StringStats>,
}

impl Summary {
    pub fn from_lines(lines: &ClassifiedLines) -> Self {
        Self {
            integers: IntegerStats::from_lines(&lines.integers),
            floats: FloatStats::from_lines(&lines.floats),
            strings: StringStats::from_lines(&lines.strings),
        }
    }
}
