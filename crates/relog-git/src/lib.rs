//! Relog Git - Version-control collaborator interfaces
//!
//! This crate defines the commit-stream and tag-resolution seams the
//! changelog builder consumes. It deliberately does not execute any
//! version-control tooling itself; hosts plug in their own sources.

pub mod source;
pub mod types;

pub use source::{take_until_fault, CommitSource, StaticSource, StaticTags, TagResolver};
pub use types::{CommitRecord, TagInfo};
