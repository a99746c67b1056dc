//! Commit-message classification
//!
//! Decomposes one commit message into zero or more classified
//! fragments matching the `category(subject) body` grammar, e.g.
//! `Bug - (maya api) fixed the importer` or `-Added(Uninstance) new
//! command`. Classification is best-effort: unrecognized text is never
//! rejected, only routed to the Misc fallback.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use relog_core::config::default_noise_phrases;

use crate::types::Message;

/// Label of the fallback bucket for unmatched commit messages
pub const MISC_CATEGORY: &str = "Misc";

/// A category word, optional dash/space separators, then a
/// parenthesized subject. Matched repeatedly across one message since
/// a single commit may describe several changes.
static FRAGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Za-z]+)[\s-]*\(").expect("Invalid regex"));

/// Normalize a category token. First match wins, case-insensitive:
/// contains `bug`, starts with `ch`, starts with `add`, starts with
/// `ignore`; anything else passes through lower-cased verbatim.
pub fn normalize_category(token: &str) -> String {
    let lower = token.to_lowercase();
    if lower.contains("bug") {
        "bug".to_string()
    } else if lower.starts_with("ch") {
        "change".to_string()
    } else if lower.starts_with("add") {
        "added".to_string()
    } else if lower.starts_with("ignore") {
        "ignore".to_string()
    } else {
        lower
    }
}

/// One classified piece of a commit message
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Normalized category label, or [`MISC_CATEGORY`]
    pub category: String,
    /// The fragment parsed as a message
    pub message: Message,
}

/// Pattern-based commit-message classifier with noise filtering
#[derive(Debug, Clone)]
pub struct CommitClassifier {
    noise_phrases: Vec<String>,
}

impl CommitClassifier {
    /// Create a classifier with custom noise phrases
    pub fn new(noise_phrases: Vec<String>) -> Self {
        Self { noise_phrases }
    }

    /// Whether a commit message matches a known noise marker (release
    /// tagging, branch/remote merges, stashes). Noisy commits are
    /// skipped outright, before classification.
    pub fn is_noise(&self, message: &str) -> bool {
        self.noise_phrases.iter().any(|p| message.contains(p.as_str()))
    }

    /// Decompose a commit message into classified fragments.
    ///
    /// Each grammar match opens a fragment that runs to the next match
    /// or the end of the message. `ignore` fragments are discarded
    /// entirely. A message with no match at all becomes a single Misc
    /// fragment whose body is the whole message.
    pub fn classify(&self, message: &str) -> Vec<Fragment> {
        let starts: Vec<(usize, String)> = FRAGMENT_REGEX
            .captures_iter(message)
            .map(|caps| {
                let whole = caps.get(0).expect("match has no extent");
                let token = caps.get(1).expect("match has no category token");
                (whole.start(), normalize_category(token.as_str()))
            })
            .collect();

        if starts.is_empty() {
            let text = message.trim();
            trace!("no grammar match; routing whole message to Misc");
            return vec![Fragment {
                category: MISC_CATEGORY.to_string(),
                message: Message::new(text, "", text),
            }];
        }

        let mut fragments = Vec::new();
        for (i, (start, category)) in starts.iter().enumerate() {
            let end = starts.get(i + 1).map(|s| s.0).unwrap_or(message.len());
            if category == "ignore" {
                trace!(fragment = &message[*start..end], "discarding ignore fragment");
                continue;
            }

            fragments.push(Fragment {
                category: category.clone(),
                message: Message::parse(&message[*start..end]),
            });
        }

        debug!(count = fragments.len(), "classified commit message");
        fragments
    }
}

impl Default for CommitClassifier {
    fn default() -> Self {
        Self::new(default_noise_phrases())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single_fragment() {
        let classifier = CommitClassifier::default();
        let fragments = classifier.classify("BugFix - (MayaPlugin) Fix FileNotFoundError");

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].category, "bug");
        assert_eq!(fragments[0].message.subject, "MayaPlugin");
        assert_eq!(fragments[0].message.body, "Fix FileNotFoundError");
    }

    #[test]
    fn test_classify_dash_before_category() {
        let classifier = CommitClassifier::default();
        let fragments = classifier.classify("-Added(Uninstance) new command");

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].category, "added");
        assert_eq!(fragments[0].message.subject, "Uninstance");
        assert_eq!(fragments[0].message.body, "new command");
    }

    #[test]
    fn test_classify_multiple_fragments() {
        let classifier = CommitClassifier::default();
        let fragments = classifier
            .classify("Bug - (maya api) fixed the importer Changed(ui) moved the panel");

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].category, "bug");
        assert_eq!(fragments[0].message.subject, "maya api");
        assert_eq!(fragments[0].message.body, "fixed the importer");
        assert_eq!(fragments[1].category, "change");
        assert_eq!(fragments[1].message.subject, "ui");
        assert_eq!(fragments[1].message.body, "moved the panel");
    }

    #[test]
    fn test_classify_fallback_to_misc() {
        let classifier = CommitClassifier::default();
        let fragments = classifier.classify("refactored the thing");

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].category, MISC_CATEGORY);
        assert_eq!(fragments[0].message.subject, "");
        assert_eq!(fragments[0].message.body, "refactored the thing");
    }

    #[test]
    fn test_classify_discards_ignore_fragments() {
        let classifier = CommitClassifier::default();
        let fragments =
            classifier.classify("Ignore(build) bumped internals Bug(io) fixed reader");

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].category, "bug");
    }

    #[test]
    fn test_classify_only_ignore_yields_nothing() {
        let classifier = CommitClassifier::default();
        let fragments = classifier.classify("Ignored(ci) retriggered the pipeline");

        assert!(fragments.is_empty());
    }

    #[test]
    fn test_normalize_category_table() {
        assert_eq!(normalize_category("BugFix"), "bug");
        assert_eq!(normalize_category("debug"), "bug");
        assert_eq!(normalize_category("Changes"), "change");
        assert_eq!(normalize_category("CHANGED"), "change");
        assert_eq!(normalize_category("Add"), "added");
        assert_eq!(normalize_category("Additions"), "added");
        assert_eq!(normalize_category("IgnoreThis"), "ignore");
        assert_eq!(normalize_category("Docs"), "docs");
    }

    #[test]
    fn test_noise_filtering() {
        let classifier = CommitClassifier::default();
        assert!(classifier.is_noise("Merge branch 'release'"));
        assert!(classifier.is_noise("Merge remote-tracking branch 'origin/main'"));
        assert!(classifier.is_noise("WIP on main: 1a2b3c saved state"));
        assert!(classifier.is_noise("Tagging release 1.4.0"));
        assert!(!classifier.is_noise("Bug(api) fixed merge conflict handling"));
    }
}
