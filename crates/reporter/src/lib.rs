//! `huntboard-reporter` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod config;
pub mod draft;
pub mod error;
pub mod session;

pub use config::ReporterConfig;
pub use error::ReporterError;
