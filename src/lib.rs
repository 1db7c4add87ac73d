// src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod presentation;

pub use app::run;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
