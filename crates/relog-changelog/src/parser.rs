//! The changelog document parser
//!
//! A forward line scan with a one-line lookback buffer: underline
//! markup conventionally follows its title, so every underline token
//! names the line above it. The grammar is strict; this parser
//! operates on trusted, self-produced documents.

use tracing::{debug, instrument};

use relog_core::error::DocumentError;

use crate::classifier::normalize_category;
use crate::types::{Category, Log, Message, Version};

/// Character whose runs underline the document header
pub const HEADER_UNDERLINE: char = '=';
/// Character whose runs underline a version title
pub const VERSION_UNDERLINE: char = '-';
/// Character whose runs underline a category title
pub const CATEGORY_UNDERLINE: char = '~';
/// A line whose first token is exactly this marker carries a message
pub const MESSAGE_MARKER: &str = "-";

/// Parser for the canonical changelog document form
#[derive(Debug, Clone)]
pub struct DocumentParser {
    title: String,
}

impl DocumentParser {
    /// Create a parser with the default document title
    pub fn new() -> Self {
        Self {
            title: "ChangeLog".to_string(),
        }
    }

    /// Use a custom title for documents without a header block
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Parse a whole document
    pub fn parse(&self, text: &str) -> Result<Log, DocumentError> {
        self.parse_lines(text.lines())
    }

    /// Parse a document given as a sequence of lines
    #[instrument(skip(self, lines))]
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<Log, DocumentError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<&str> = lines.into_iter().collect();
        let mut log = Log::new(&self.title);
        let mut current_version: Option<Version> = None;

        for (idx, raw) in lines.iter().enumerate() {
            let line = idx + 1;
            let Some(first) = raw.split_whitespace().next() else {
                continue;
            };

            if first == MESSAGE_MARKER {
                let content = raw.trim_start()[MESSAGE_MARKER.len()..].trim();
                let category = current_version
                    .as_mut()
                    .and_then(|v| v.categories.last_mut())
                    .ok_or(DocumentError::OrphanMessage { line })?;
                category.add_message(Message::parse(content));
            } else if is_run_of(first, HEADER_UNDERLINE) {
                // Decorative header markup. The underline below the
                // title line recovers the document label.
                if let Some(title) = lookback(&lines, idx) {
                    if !is_run_of(title, HEADER_UNDERLINE) {
                        log.label = title.to_string();
                    }
                }
            } else if is_run_of(first, VERSION_UNDERLINE) {
                let title =
                    lookback(&lines, idx).ok_or(DocumentError::MissingTitle { line })?;
                if let Some(version) = current_version.take() {
                    log.insert_version(version);
                }
                let (version, date) = split_version_title(title);
                current_version = Some(Version::new(version, date));
            } else if is_run_of(first, CATEGORY_UNDERLINE) {
                let title =
                    lookback(&lines, idx).ok_or(DocumentError::MissingTitle { line })?;
                let label = normalize_category(title);
                let version =
                    current_version
                        .as_mut()
                        .ok_or_else(|| DocumentError::OrphanCategory {
                            line,
                            title: title.to_string(),
                        })?;
                version.add_category(Category::new(label));
            }
            // Anything else is a title line or free text; it only
            // matters through the lookback of a later underline.
        }

        if let Some(version) = current_version.take() {
            log.insert_version(version);
        }

        debug!(versions = log.versions().len(), "parsed changelog document");
        Ok(log)
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_run_of(token: &str, c: char) -> bool {
    !token.is_empty() && token.chars().all(|x| x == c)
}

/// The title line of an underline at `idx`: the previous line, if it
/// exists and is not blank.
fn lookback<'a>(lines: &[&'a str], idx: usize) -> Option<&'a str> {
    if idx == 0 {
        return None;
    }
    let prev = lines[idx - 1].trim();
    (!prev.is_empty()).then_some(prev)
}

/// Split a version title `"{version} ({date})"` into its parts. A
/// title without a parenthesized date yields an empty date.
fn split_version_title(title: &str) -> (String, String) {
    let parsed = title.find('(').and_then(|open| {
        title[open + 1..]
            .find(')')
            .map(|close| (open, open + 1 + close))
    });

    match parsed {
        Some((open, close)) => {
            let version = title[..open].trim().to_string();
            let date = title[open + 1..close].trim().to_string();
            (version, date)
        }
        None => (title.trim().to_string(), String::new()),
    }
}
