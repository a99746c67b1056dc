//! Error types for relog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelogError
pub type Result<T> = std::result::Result<T, RelogError>;

/// Main error type for relog operations
#[derive(Debug, Error)]
pub enum RelogError {
    /// Document parsing errors
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Changelog build errors
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Structural errors raised while parsing a changelog document.
///
/// Parsing operates on trusted, self-produced documents, so a malformed
/// document is a hard failure rather than something to recover from.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A category underline appeared before any version header
    #[error("line {line}: category '{title}' appears before any version header")]
    OrphanCategory { line: usize, title: String },

    /// A message marker appeared before any category header
    #[error("line {line}: message entry appears before any category header")]
    OrphanMessage { line: usize },

    /// An underline token with no title line above it
    #[error("line {line}: underline has no title line above it")]
    MissingTitle { line: usize },
}

/// Errors raised while building a new release section
#[derive(Debug, Error)]
pub enum BuildError {
    /// Neither a resolvable tag nor an explicit version was supplied
    #[error("cannot resolve a version label: target is not a tag and no explicit version was given")]
    MissingVersion,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// TOML parsing error
    #[error("Failed to parse configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

impl RelogError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
