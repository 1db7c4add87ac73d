// crates/shared-kernel/src/value_objects/category.rs
use std::fmt;

/// Classification bucket for a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Integer,
    Float,
    String,
}

impl Category {
    /// Fixed processing order used for writing and reporting.
    pub const ALL: [Self; 3] = [Self::Integer, Self::Float, Self::String];

    /// Stem of the output file, before the `.txt` extension.
    #[inline]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Integer => "integers",
            Self::Float => "floats",
            Self::String => "strings",
        }
    }

    /// Output file name for the given prefix, e.g. `out_integers.txt`.
    pub fn file_name(self, prefix: &str) -> String {
        format!("{prefix}{}.txt", self.file_stem())
    }

    /// Plural label used in console reports.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "Integers",
            Self::Float => "Floats",
            Self::String => "Strings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
