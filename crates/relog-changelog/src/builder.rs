//! Building and merging release sections from a commit stream

use chrono::Utc;
use tracing::{debug, info, instrument};

use relog_core::config::ChangelogConfig;
use relog_core::error::BuildError;
use relog_git::{CommitSource, TagResolver};

use crate::classifier::{CommitClassifier, MISC_CATEGORY};
use crate::types::{Log, Version};

/// Date display format of newly built release sections
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds one release section from a commit stream and merges it into
/// a log, preserving the sort state of previously published versions.
pub struct ChangelogBuilder {
    config: ChangelogConfig,
    classifier: CommitClassifier,
}

impl ChangelogBuilder {
    /// Create a builder from configuration
    pub fn new(config: ChangelogConfig) -> Self {
        let classifier = CommitClassifier::new(config.noise_phrases.clone());
        Self { config, classifier }
    }

    /// Use a custom classifier
    pub fn with_classifier(mut self, classifier: CommitClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Build or update one release section.
    ///
    /// The target label comes from `to` when it resolves to a tag (tag
    /// name plus its commit date); otherwise `explicit_version` is
    /// required. Prior categories of `existing` are frozen so a later
    /// build never re-orders already-published entries. A release that
    /// receives no messages is not inserted at all.
    #[instrument(skip(self, source, tags, existing))]
    pub fn build(
        &self,
        source: &dyn CommitSource,
        tags: &dyn TagResolver,
        from: &str,
        to: Option<&str>,
        explicit_version: Option<&str>,
        existing: Option<Log>,
    ) -> Result<Log, BuildError> {
        let (label, date) = match to.and_then(|r| tags.resolve(r)) {
            Some(tag) => (tag.name.clone(), tag.timestamp.format(DATE_FORMAT).to_string()),
            None => {
                let version = explicit_version.ok_or(BuildError::MissingVersion)?;
                (version.to_string(), Utc::now().format(DATE_FORMAT).to_string())
            }
        };

        let mut log = existing.unwrap_or_else(|| Log::new(&self.config.title));
        let frozen = log.freeze_sorting();
        debug!(frozen, "froze sort order of pre-existing categories");

        let mut version = Version::new(&label, &date);
        let mut commits = 0usize;
        let mut noise = 0usize;

        for commit in source.commits_between(from, to) {
            if self.classifier.is_noise(&commit.message) {
                noise += 1;
                continue;
            }
            commits += 1;

            for fragment in self.classifier.classify(&commit.message) {
                let category = if fragment.category == MISC_CATEGORY {
                    self.config.misc_category.as_str()
                } else {
                    fragment.category.as_str()
                };
                version.category_entry(category).add_message(fragment.message);
            }
        }

        if version.is_empty() {
            info!(
                version = %version.label(),
                commits,
                noise,
                "no classified changes; release section suppressed"
            );
            return Ok(log);
        }

        info!(
            version = %version.label(),
            commits,
            noise,
            categories = version.categories.len(),
            "built release section"
        );
        log.insert_version(version);
        Ok(log)
    }
}
