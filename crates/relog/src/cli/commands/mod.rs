//! CLI command implementations

mod check;
mod fmt;
mod merge;

pub use check::CheckCommand;
pub use fmt::FmtCommand;
pub use merge::MergeCommand;
