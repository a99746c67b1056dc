//! The changelog document model
//!
//! A Log owns Versions, a Version owns Categories, a Category owns
//! Messages; nothing is shared between parents.

use crate::version::DottedVersion;

/// One change entry.
///
/// `label` keeps the original unparsed text and is the authoritative
/// fallback when no subject/body could be extracted. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct Message {
    /// Original unparsed text
    pub label: String,
    /// Text of the first parenthesized group, may be empty
    pub subject: String,
    /// Free text after the first closing parenthesis, may be empty
    pub body: String,
}

impl Message {
    /// Create a message from already-extracted parts
    pub fn new(
        label: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Parse a message from a document line or commit-message fragment.
    ///
    /// The first parenthesized group becomes the subject; everything
    /// strictly after its closing parenthesis becomes the body. Without
    /// a parenthesized group both stay empty and only `label` carries
    /// the text.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        let parsed = text.find('(').and_then(|open| {
            text[open + 1..]
                .find(')')
                .map(|close| (open, open + 1 + close))
        });

        match parsed {
            Some((open, close)) => {
                let subject = text[open + 1..close].trim().to_string();
                let body = text[close + 1..].trim().to_string();
                Self::new(text, subject, body)
            }
            None => Self::new(text, "", ""),
        }
    }
}

/// A named group of messages within a version
#[derive(Debug, Clone)]
pub struct Category {
    /// Normalized category token, or verbatim lowercase input
    pub label: String,
    /// Messages in insertion order
    pub messages: Vec<Message>,
    /// Whether serialization re-orders messages by subject
    pub sorted: bool,
}

impl Category {
    /// Create a new, initially sorted category
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            messages: Vec::new(),
            sorted: true,
        }
    }

    /// Append a message
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Check if the category has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The `ignore` category is a sink and never serialized
    pub fn is_ignore(&self) -> bool {
        self.label.eq_ignore_ascii_case("ignore")
    }
}

/// One release section of the log
#[derive(Debug, Clone)]
pub struct Version {
    /// Version string, e.g. `"1.2.13"`
    pub version: String,
    /// Opaque display date; no arithmetic is ever performed on it
    pub date: String,
    /// Comparable ordering key derived from `version`
    key: DottedVersion,
    /// Categories in insertion order
    pub categories: Vec<Category>,
}

impl Version {
    /// Create a new release section
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        let version = version.into();
        let key = DottedVersion::parse(&version);

        Self {
            version,
            date: date.into(),
            key,
            categories: Vec::new(),
        }
    }

    /// Display label, `"{version} ({date})"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.version, self.date)
    }

    /// The ordering key
    pub fn key(&self) -> &DottedVersion {
        &self.key
    }

    /// Append a category
    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Find a category by label (case-insensitive), creating it on
    /// first use.
    pub fn category_entry(&mut self, label: &str) -> &mut Category {
        let pos = self
            .categories
            .iter()
            .position(|c| c.label.eq_ignore_ascii_case(label));

        match pos {
            Some(idx) => &mut self.categories[idx],
            None => {
                self.categories.push(Category::new(label));
                self.categories.last_mut().unwrap()
            }
        }
    }

    /// Check if the version has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Root of the document model
#[derive(Debug, Clone)]
pub struct Log {
    /// Document title, e.g. "ChangeLog"
    pub label: String,
    versions: Vec<Version>,
}

impl Log {
    /// Create an empty log
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            versions: Vec::new(),
        }
    }

    /// Versions in insertion order
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// Mutable access to the versions, insertion order
    pub fn versions_mut(&mut self) -> &mut [Version] {
        &mut self.versions
    }

    /// Look up a version by display label
    pub fn get(&self, label: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.label() == label)
    }

    /// Look up a version by its version string alone
    pub fn find_version(&self, version: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.version == version)
    }

    /// Insert a version keyed by its display label, replacing any
    /// existing entry with the same label in place.
    pub fn insert_version(&mut self, version: Version) {
        let label = version.label();
        match self.versions.iter().position(|v| v.label() == label) {
            Some(idx) => self.versions[idx] = version,
            None => self.versions.push(version),
        }
    }

    /// Versions in canonical read order: descending by dotted-version
    /// key, ties stable by insertion order.
    pub fn sorted_versions(&self) -> Vec<&Version> {
        let mut sorted: Vec<&Version> = self.versions.iter().collect();
        sorted.sort_by(|a, b| b.key().cmp(a.key()));
        sorted
    }

    /// Freeze the message order of every category currently in the log
    /// so that a later build never re-orders previously published
    /// entries. Returns the number of categories touched.
    pub fn freeze_sorting(&mut self) -> usize {
        let mut count = 0;
        for version in &mut self.versions {
            for category in &mut version.categories {
                category.sorted = false;
                count += 1;
            }
        }
        count
    }
}

/// A borrowed node of the document tree
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Version(&'a Version),
    Category(&'a Category),
    Message(&'a Message),
}

impl<'a> From<&'a Version> for Node<'a> {
    fn from(v: &'a Version) -> Self {
        Node::Version(v)
    }
}

impl<'a> From<&'a Category> for Node<'a> {
    fn from(c: &'a Category) -> Self {
        Node::Category(c)
    }
}

/// Depth-first traversal over every descendant of a node, in child
/// order. Finite, and each call produces an independent traversal.
pub fn descendants<'a>(node: impl Into<Node<'a>>) -> Descendants<'a> {
    let mut stack = Vec::new();
    push_children(node.into(), &mut stack);
    Descendants { stack }
}

/// Depth-first traversal over every node of a log
pub fn walk(log: &Log) -> Descendants<'_> {
    let mut stack: Vec<Node<'_>> = log.versions.iter().rev().map(Node::Version).collect();
    Descendants { stack }
}

/// Iterator produced by [`descendants`] and [`walk`]
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<Node<'a>>,
}

fn push_children<'a>(node: Node<'a>, stack: &mut Vec<Node<'a>>) {
    match node {
        Node::Version(v) => stack.extend(v.categories.iter().rev().map(Node::Category)),
        Node::Category(c) => stack.extend(c.messages.iter().rev().map(Node::Message)),
        Node::Message(_) => {}
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        push_children(node, &mut self.stack);
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_parse_subject_and_body() {
        let msg = Message::parse("(maya api) fixed the importer");
        assert_eq!(msg.subject, "maya api");
        assert_eq!(msg.body, "fixed the importer");
        assert_eq!(msg.label, "(maya api) fixed the importer");
    }

    #[test]
    fn test_message_parse_without_parens() {
        let msg = Message::parse("just some text");
        assert_eq!(msg.subject, "");
        assert_eq!(msg.body, "");
        assert_eq!(msg.label, "just some text");
    }

    #[test]
    fn test_message_parse_unclosed_paren() {
        let msg = Message::parse("broken (subject without close");
        assert_eq!(msg.subject, "");
        assert_eq!(msg.body, "");
    }

    #[test]
    fn test_sorted_versions_numeric_order() {
        let mut log = Log::new("ChangeLog");
        log.insert_version(Version::new("1.2.0", "2024-01-01"));
        log.insert_version(Version::new("1.10.0", "2024-03-01"));
        log.insert_version(Version::new("1.2.13", "2024-02-01"));

        let order: Vec<&str> = log
            .sorted_versions()
            .iter()
            .map(|v| v.version.as_str())
            .collect();
        assert_eq!(order, ["1.10.0", "1.2.13", "1.2.0"]);
    }

    #[test]
    fn test_insert_version_overwrites_same_label() {
        let mut log = Log::new("ChangeLog");
        log.insert_version(Version::new("1.0.0", "2024-01-01"));

        let mut replacement = Version::new("1.0.0", "2024-01-01");
        replacement.add_category(Category::new("bug"));
        log.insert_version(replacement);

        assert_eq!(log.versions().len(), 1);
        assert_eq!(log.versions()[0].categories.len(), 1);
    }

    #[test]
    fn test_category_entry_is_case_insensitive() {
        let mut version = Version::new("1.0.0", "2024-01-01");
        version.category_entry("Bug").add_message(Message::parse("(a) x"));
        version.category_entry("bug").add_message(Message::parse("(b) y"));

        assert_eq!(version.categories.len(), 1);
        assert_eq!(version.categories[0].messages.len(), 2);
    }

    #[test]
    fn test_descendants_depth_first() {
        let mut version = Version::new("1.0.0", "2024-01-01");
        let mut bug = Category::new("bug");
        bug.add_message(Message::parse("(a) first"));
        bug.add_message(Message::parse("(b) second"));
        version.add_category(bug);
        version.add_category(Category::new("added"));

        let kinds: Vec<&str> = descendants(&version)
            .map(|n| match n {
                Node::Version(_) => "version",
                Node::Category(_) => "category",
                Node::Message(_) => "message",
            })
            .collect();
        assert_eq!(
            kinds,
            ["category", "message", "message", "category"]
        );

        // Restartable: a second traversal is independent and complete
        assert_eq!(descendants(&version).count(), 4);
    }

    #[test]
    fn test_walk_covers_whole_log() {
        let mut log = Log::new("ChangeLog");
        let mut v = Version::new("1.0.0", "2024-01-01");
        let mut c = Category::new("added");
        c.add_message(Message::parse("(x) y"));
        v.add_category(c);
        log.insert_version(v);

        assert_eq!(walk(&log).count(), 3);
    }

    #[test]
    fn test_freeze_sorting() {
        let mut log = Log::new("ChangeLog");
        let mut v = Version::new("1.0.0", "2024-01-01");
        v.add_category(Category::new("added"));
        v.add_category(Category::new("bug"));
        log.insert_version(v);

        assert_eq!(log.freeze_sorting(), 2);
        assert!(log.versions()[0].categories.iter().all(|c| !c.sorted));
    }
}
