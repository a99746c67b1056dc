//! Loose dotted-version keys
//!
//! Release labels here are not guaranteed to be strict semver, so this
//! is an explicit value type rather than a `semver::Version`: any
//! string parses, and comparison is component-wise with numeric
//! components compared as integers.

use std::cmp::Ordering;

/// A comparable key derived from a version string like `"1.2.13"`.
///
/// Components are the maximal alphanumeric runs of the input. Two
/// components compare as integers when both are numeric, otherwise as
/// plain strings; given an equal prefix, the key with fewer components
/// compares as less.
#[derive(Debug, Clone)]
pub struct DottedVersion {
    raw: String,
    parts: Vec<String>,
}

impl DottedVersion {
    /// Parse a version string. Never fails; unusual input just yields
    /// unusual (but still comparable) components.
    pub fn parse(text: &str) -> Self {
        let parts = text
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            raw: text.to_string(),
            parts,
        }
    }

    /// The original version string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The split components
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

fn compare_component(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

impl Ord for DottedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.parts.iter().zip(other.parts.iter()) {
            match compare_component(a, b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.parts.len().cmp(&other.parts.len())
    }
}

impl PartialOrd for DottedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DottedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DottedVersion {}

impl std::fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
