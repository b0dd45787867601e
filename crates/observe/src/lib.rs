//! Logging setup shared between the binaries and the tests of the workspace.
pub mod config;
pub mod tracing;

pub use config::Config;
