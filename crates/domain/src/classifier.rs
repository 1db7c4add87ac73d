// crates/domain/src/classifier.rs
//! Line classification into integers, floats and strings.
//!
//! The integer check runs first and only accepts an optionally signed run of
//! ASCII digits. Lines failing it are tested against the two float shapes
//! (`[-+]?\d*\.\d+(exp)?` and `[-+]?\d+exp`). Anything else is a string.

use std::str::FromStr;
use std::sync::OnceLock;

use line_sorter_shared_kernel::Category;
use num_bigint::BigInt;
use regex::Regex;

/// Result of classifying a single line, carrying the parsed numeric value.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Integer(BigInt),
    Float(f64),
    String,
}

impl Classification {
    pub const fn category(&self) -> Category {
        match self {
            Self::Integer(_) => Category::Integer,
            Self::Float(_) => Category::Float,
            Self::String => Category::String,
        }
    }
}

/// Strip the characters that surround a line's content (ASCII space and
/// control characters, including the `\r` of CRLF endings).
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= '\u{20}')
}

/// Classify an already trimmed line.
pub fn classify(line: &str) -> Classification {
    if let Some(value) = parse_integer(line) {
        Classification::Integer(value)
    } else if let Some(value) = parse_float(line) {
        Classification::Float(value)
    } else {
        Classification::String
    }
}

/// Parse `line` as an arbitrary-precision integer.
///
/// Lines containing a decimal point or an exponent marker never qualify,
/// even when some parser would accept them.
pub fn parse_integer(line: &str) -> Option<BigInt> {
    if line.contains(['.', 'e', 'E']) {
        return None;
    }
    if !integer_pattern().is_match(line) {
        return None;
    }
    BigInt::from_str(line).ok()
}

/// Parse `line` as a double when it has one of the accepted float shapes.
pub fn parse_float(line: &str) -> Option<f64> {
    if !fraction_pattern().is_match(line) && !exponent_pattern().is_match(line) {
        return None;
    }
    line.parse::<f64>().ok()
}

fn integer_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-+]?[0-9]+$").expect("valid integer regex"))
}

fn fraction_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[-+]?[0-9]*\.[0-9]+(?:[eE][-+]?[0-9]+)?$").expect("valid fraction regex")
    })
}

fn exponent_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-+]?[0-9]+[eE][-+]?[0-9]+$").expect("valid exponent regex"))
}
