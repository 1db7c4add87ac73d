// src/config.rs
use crate::args::Args;
use line_sorter_infra::OutputTarget;
use line_sorter_shared_kernel::{PresentationError, PresentationResult};
use std::path::PathBuf;

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub append: bool,
    pub short_stats: bool,
    pub full_stats: bool,
    pub prefix: String,
    pub output_dir: PathBuf,
    pub inputs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            append: false,
            short_stats: false,
            full_stats: false,
            prefix: String::new(),
            output_dir: PathBuf::from("."),
            inputs: Vec::new(),
        }
    }
}

impl Config {
    /// Interpret the raw command line.
    ///
    /// `-a`, `-s` and `-f` are switches; `-p` and `-o` take the next token
    /// verbatim, the last occurrence winning. Every other token is an input
    /// path. A trailing `-p`/`-o` without a value is passed to `on_warning`
    /// and leaves the previous value in place. An empty input list is fatal.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::NoInputFiles`] when no input file was given.
    pub fn from_args(
        args: Args,
        mut on_warning: impl FnMut(PresentationError),
    ) -> PresentationResult<Self> {
        let mut config = Self::default();
        let mut tokens = args.tokens.into_iter();

        while let Some(token) = tokens.next() {
            match token.to_str() {
                Some("-a") => config.append = true,
                Some("-s") => config.short_stats = true,
                Some("-f") => config.full_stats = true,
                Some("-p") => match tokens.next() {
                    Some(value) => config.prefix = value.to_string_lossy().into_owned(),
                    None => on_warning(PresentationError::MissingValue {
                        flag: "-p",
                        expected: "a prefix",
                    }),
                },
                Some("-o") => match tokens.next() {
                    Some(value) => config.output_dir = PathBuf::from(value),
                    None => on_warning(PresentationError::MissingValue {
                        flag: "-o",
                        expected: "a path",
                    }),
                },
                _ => config.inputs.push(PathBuf::from(token)),
            }
        }

        if config.inputs.is_empty() {
            return Err(PresentationError::NoInputFiles);
        }
        Ok(config)
    }

    /// Counts are printed for `-s` and also as part of `-f`.
    pub const fn wants_short_stats(&self) -> bool {
        self.short_stats || self.full_stats
    }

    pub const fn wants_full_stats(&self) -> bool {
        self.full_stats
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget {
            dir: self.output_dir.clone(),
            prefix: self.prefix.clone(),
            append: self.append,
        }
    }
}
