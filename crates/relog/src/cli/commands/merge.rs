//! Merge command

use clap::Args;
use console::style;
use tracing::info;

use relog_changelog::{ChangelogBuilder, DocumentParser};
use relog_core::config::load_config_or_default;
use relog_git::{CommitRecord, StaticSource, StaticTags, TagInfo};

use crate::cli::Cli;

/// Merge a new release section from a commit list
///
/// Commits are read from a JSON file of `{timestamp, author, message}`
/// records, extracted from source control by the surrounding release
/// process.
#[derive(Debug, Args)]
pub struct MergeCommand {
    /// JSON file with the commit records for the range
    #[arg(long, value_name = "FILE")]
    pub commits: std::path::PathBuf,

    /// Revision marker the range starts from
    #[arg(long, value_name = "REF")]
    pub from: String,

    /// Revision marker the range ends at (defaults to HEAD)
    #[arg(long, value_name = "REF")]
    pub to: Option<String>,

    /// Explicit version label when the target is not a tag
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Tag known to the release process, as `name=timestamp` (RFC 3339)
    #[arg(long, value_name = "NAME=TIMESTAMP")]
    pub tag: Option<String>,

    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<std::path::PathBuf>,

    /// Write the result back instead of printing to stdout
    #[arg(short, long)]
    pub write: bool,
}

impl MergeCommand {
    /// Execute the merge command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let path = self
            .file
            .clone()
            .unwrap_or_else(|| cwd.join(&config.changelog.file));
        info!(
            path = %path.display(),
            commits = %self.commits.display(),
            from = %self.from,
            to = ?self.to,
            "merging release section"
        );

        let records: Vec<CommitRecord> =
            serde_json::from_str(&std::fs::read_to_string(&self.commits)?)?;
        let source = StaticSource::new(records);
        let tags = self.tag_resolver()?;

        let parser = DocumentParser::new().with_title(&config.changelog.title);
        let existing = if path.exists() {
            Some(parser.parse(&std::fs::read_to_string(&path)?)?)
        } else {
            None
        };

        let builder = ChangelogBuilder::new(config.changelog.clone());
        let log = builder.build(
            &source,
            &tags,
            &self.from,
            self.to.as_deref(),
            self.version.as_deref(),
            existing,
        )?;
        let canonical = log.render_string();

        if self.write {
            std::fs::write(&path, &canonical)?;
            if !cli.quiet {
                println!(
                    "{} Merged release section into {}",
                    style("✓").green(),
                    path.display()
                );
            }
        } else {
            print!("{}", canonical);
        }

        Ok(())
    }

    /// The resolver only knows the tag handed in on the command line,
    /// if any; everything else falls back to the explicit version.
    fn tag_resolver(&self) -> anyhow::Result<StaticTags> {
        let Some(spec) = &self.tag else {
            return Ok(StaticTags::default());
        };

        let (name, stamp) = spec
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("--tag expects NAME=TIMESTAMP, got '{spec}'"))?;
        let timestamp = stamp
            .parse::<chrono::DateTime<chrono::Utc>>()
            .map_err(|e| anyhow::anyhow!("invalid --tag timestamp '{stamp}': {e}"))?;

        Ok(StaticTags::default().with_tag(TagInfo::new(name, timestamp)))
    }
}
