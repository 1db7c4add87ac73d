// src/logging.rs
//! Diagnostic logging setup.
//!
//! Trace output goes to stderr through `env_logger`. The filter is read from
//! `LINE_SORTER_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`.

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LINE_SORTER_LOG";

pub fn init() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, "warn");
    // A logger may already be installed (e.g. by a test harness).
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
