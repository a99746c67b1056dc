//! Commit and tag record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One commit record yielded by a commit-log source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Author name
    pub author: String,
    /// Full commit message
    pub message: String,
}

impl CommitRecord {
    /// Create a new CommitRecord
    pub fn new(
        message: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            message: message.into(),
        }
    }
}

/// Information about a resolved tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// Timestamp of the commit the tag points to
    pub timestamp: DateTime<Utc>,
}

impl TagInfo {
    /// Create a new TagInfo
    pub fn new(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }
}
