//! Relog Core - Shared errors and configuration for the changelog pipeline

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config};
pub use error::{BuildError, ConfigError, DocumentError, RelogError, Result};
