//! Round-trip tests: a rendered log, parsed again, must re-render to
//! byte-identical text.

use relog_changelog::{walk, Category, DocumentParser, Log, Message, Node, Version};

fn message(subject: &str, body: &str) -> Message {
    Message::new(format!("({}) {}", subject, body), subject, body)
}

fn sample_log() -> Log {
    let mut log = Log::new("ChangeLog");

    let mut v1 = Version::new("1.2.0", "2024-01-05");
    let mut added = Category::new("added");
    added.add_message(message("Uninstance", "new command"));
    added.add_message(message("maya api", "exposed the importer"));
    v1.add_category(added);
    let mut bug = Category::new("bug");
    bug.add_message(message("Export", "fixed the crash"));
    v1.add_category(bug);
    log.insert_version(v1);

    let mut v2 = Version::new("1.10.0", "2024-03-20");
    let mut change = Category::new("change");
    change.add_message(message("Ui", "moved the toolbar"));
    v2.add_category(change);
    log.insert_version(v2);

    log
}

#[test]
fn rendered_output_reparses_to_the_same_text() {
    let log = sample_log();
    let rendered = log.render_string();

    let reparsed = DocumentParser::new().parse(&rendered).unwrap();
    assert_eq!(reparsed.render_string(), rendered);
}

#[test]
fn reparse_preserves_model_shape() {
    let log = sample_log();
    let reparsed = DocumentParser::new()
        .parse(&log.render_string())
        .unwrap();

    assert_eq!(reparsed.label, "ChangeLog");
    assert_eq!(reparsed.versions().len(), 2);

    let node_count = walk(&log).count();
    assert_eq!(walk(&reparsed).count(), node_count);

    let messages = walk(&reparsed)
        .filter(|n| matches!(n, Node::Message(_)))
        .count();
    assert_eq!(messages, 4);
}

#[test]
fn canonicalization_is_idempotent_for_parsed_documents() {
    // A hand-written document in non-canonical order; one pass through
    // parse + render must be a fixed point of the pipeline.
    let doc = "\
=========
ChangeLog
=========

1.2.0 (2024-01-05)
------------------

bugs
~~~~

- (zebra) last fix
- (alpha) first fix
";
    let parser = DocumentParser::new();
    let canonical = parser.parse(doc).unwrap().render_string();
    let again = parser.parse(&canonical).unwrap().render_string();
    assert_eq!(again, canonical);

    // Normalization happened on the way through
    assert!(canonical.contains("Bug\n~~~"));
    assert!(canonical.contains("- (Alpha) First fix."));
    let alpha = canonical.find("(Alpha)").unwrap();
    let zebra = canonical.find("(Zebra)").unwrap();
    assert!(alpha < zebra);
}

#[test]
fn ignore_category_drops_out_after_one_pass() {
    let doc = "\
1.0.0 (2024-01-01)
------------------

Ignore
~~~~~~

- (internal) churn

Added
~~~~~

- (Thing) kept
";
    let canonical = DocumentParser::new().parse(doc).unwrap().render_string();
    assert!(!canonical.contains("churn"));
    assert!(canonical.contains("- (Thing) Kept."));
}
