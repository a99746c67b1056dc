//! Relog Changelog - The changelog build pipeline core
//!
//! Parses a structured line-oriented changelog document into a
//! Log/Version/Category/Message tree, re-serializes the tree into its
//! canonical document form, and populates new release sections by
//! classifying commit messages against the `category(subject) body`
//! grammar.

pub mod builder;
pub mod classifier;
pub mod formatter;
pub mod parser;
pub mod types;
pub mod version;

pub use builder::ChangelogBuilder;
pub use classifier::{normalize_category, CommitClassifier, Fragment, MISC_CATEGORY};
pub use parser::DocumentParser;
pub use types::{descendants, walk, Category, Log, Message, Node, Version};
pub use version::DottedVersion;
