//! Commit-stream and tag-resolution seams
//!
//! The builder consumes commits through `CommitSource` and resolves
//! release targets through `TagResolver`. Implementations backed by a
//! real version-control tool live with the host; the in-memory
//! implementations here cover tests and pre-extracted logs.

use tracing::warn;

use crate::types::{CommitRecord, TagInfo};

/// A source of commit records for a revision range.
///
/// `to = None` means "to HEAD". Implementations must terminate the
/// iteration, rather than panic or propagate, when the underlying tool
/// reports a fatal condition mid-stream.
pub trait CommitSource {
    /// Yield the commits between two revision markers, oldest first or
    /// newest first as the underlying tool reports them.
    fn commits_between(
        &self,
        from: &str,
        to: Option<&str>,
    ) -> Box<dyn Iterator<Item = CommitRecord> + '_>;
}

/// Resolves a revision reference to a tag, if it names one.
pub trait TagResolver {
    /// Resolve `reference` to tag information, or None if it is not a tag.
    fn resolve(&self, reference: &str) -> Option<TagInfo>;
}

/// Adapts a fallible record iterator into the soft-truncation contract:
/// the stream ends at the first error, and records already yielded are
/// kept. The fault is logged, not propagated.
pub fn take_until_fault<I, E>(iter: I) -> impl Iterator<Item = CommitRecord>
where
    I: Iterator<Item = Result<CommitRecord, E>>,
    E: std::fmt::Display,
{
    iter.map_while(|item| match item {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(%err, "commit log truncated by upstream fault");
            None
        }
    })
}

/// In-memory commit source backed by a pre-resolved record list.
///
/// The range markers are accepted and ignored; whoever produced the
/// list already applied them.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    commits: Vec<CommitRecord>,
}

impl StaticSource {
    /// Create a source over a fixed list of records
    pub fn new(commits: Vec<CommitRecord>) -> Self {
        Self { commits }
    }
}

impl CommitSource for StaticSource {
    fn commits_between(
        &self,
        _from: &str,
        _to: Option<&str>,
    ) -> Box<dyn Iterator<Item = CommitRecord> + '_> {
        Box::new(self.commits.iter().cloned())
    }
}

/// In-memory tag resolver backed by a fixed tag list
#[derive(Debug, Clone, Default)]
pub struct StaticTags {
    tags: Vec<TagInfo>,
}

impl StaticTags {
    /// Create a resolver over a fixed tag list
    pub fn new(tags: Vec<TagInfo>) -> Self {
        Self { tags }
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: TagInfo) -> Self {
        self.tags.push(tag);
        self
    }
}

impl TagResolver for StaticTags {
    fn resolve(&self, reference: &str) -> Option<TagInfo> {
        self.tags.iter().find(|t| t.name == reference).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_static_source() {
        let source = StaticSource::new(vec![
            CommitRecord::new("first", "a", Utc::now()),
            CommitRecord::new("second", "b", Utc::now()),
        ]);

        let commits: Vec<_> = source.commits_between("v1.0.0", None).collect();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "first");
    }

    #[test]
    fn test_static_tags() {
        let tags = StaticTags::default().with_tag(TagInfo::new("v1.2.0", Utc::now()));

        assert!(tags.resolve("v1.2.0").is_some());
        assert!(tags.resolve("HEAD").is_none());
    }

    #[test]
    fn test_take_until_fault_stops_at_error() {
        let items: Vec<Result<CommitRecord, String>> = vec![
            Ok(CommitRecord::new("kept", "a", Utc::now())),
            Err("fatal: bad object".to_string()),
            Ok(CommitRecord::new("dropped", "a", Utc::now())),
        ];

        let records: Vec<_> = take_until_fault(items.into_iter()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "kept");
    }

    #[test]
    fn test_take_until_fault_clean_stream() {
        let items: Vec<Result<CommitRecord, String>> = vec![
            Ok(CommitRecord::new("one", "a", Utc::now())),
            Ok(CommitRecord::new("two", "a", Utc::now())),
        ];

        let records: Vec<_> = take_until_fault(items.into_iter()).collect();
        assert_eq!(records.len(), 2);
    }
}
