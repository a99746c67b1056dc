//! Canonical document serialization
//!
//! Deterministic re-emission of a Log as the exact text the parser
//! consumes. Operates purely on already-valid in-memory data, so there
//! are no failure modes.

use tracing::debug;

use crate::parser::{CATEGORY_UNDERLINE, HEADER_UNDERLINE, VERSION_UNDERLINE};
use crate::types::{Category, Log, Message};

impl Log {
    /// Render the log as canonical document lines
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let header = underline(HEADER_UNDERLINE, &self.label);
        lines.push(header.clone());
        lines.push(self.label.clone());
        lines.push(header);
        lines.push(String::new());

        for version in self.sorted_versions() {
            let title = version.label();
            lines.push(String::new());
            lines.push(title.clone());
            lines.push(underline(VERSION_UNDERLINE, &title));
            lines.push(String::new());

            let mut categories: Vec<&Category> =
                version.categories.iter().filter(|c| !c.is_ignore()).collect();
            categories.sort_by_key(|c| title_case(&c.label));

            for category in categories {
                let title = title_case(&category.label);
                lines.push(title.clone());
                lines.push(underline(CATEGORY_UNDERLINE, &title));
                lines.push(String::new());

                let mut messages: Vec<&Message> = category.messages.iter().collect();
                if category.sorted {
                    messages.sort_by_key(|m| rendered_subject(m));
                }
                for message in messages {
                    lines.push(render_message(message));
                }
                lines.push(String::new());
            }
        }

        debug!(lines = lines.len(), "rendered changelog document");
        lines
    }

    /// Render the log as one newline-terminated string
    pub fn render_string(&self) -> String {
        let mut text = self.render().join("\n");
        text.push('\n');
        text
    }
}

fn underline(c: char, title: &str) -> String {
    std::iter::repeat(c).take(title.chars().count()).collect()
}

/// Title-case each whitespace-separated word: first character upper,
/// the rest lower.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// The subject as it appears in the rendered line: title-cased, or the
/// literal `Misc` when empty. Sorted categories order by this rendered
/// form so that a re-parse of the output stays canonical.
fn rendered_subject(message: &Message) -> String {
    if message.subject.is_empty() {
        "Misc".to_string()
    } else {
        title_case(&message.subject)
    }
}

fn render_message(message: &Message) -> String {
    let subject = rendered_subject(message);

    if message.body.is_empty() {
        // No extracted body; the raw label is the authoritative text.
        format!("- ({}) {}", subject, message.label)
    } else {
        let mut body: String = message.body.clone();
        if let Some(first) = body.chars().next() {
            let upper: String = first.to_uppercase().collect();
            body.replace_range(..first.len_utf8(), &upper);
        }
        if !body.ends_with('.') {
            body.push('.');
        }
        format!("- ({}) {}", subject, body)
    }
}
