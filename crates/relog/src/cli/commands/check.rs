//! Check command

use anyhow::bail;
use clap::Args;
use console::style;
use tracing::info;

use relog_changelog::DocumentParser;
use relog_core::config::load_config_or_default;

use crate::cli::Cli;

/// Verify that a changelog document is already canonical
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Changelog file (defaults to the configured file)
    pub file: Option<std::path::PathBuf>,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let path = self
            .file
            .clone()
            .unwrap_or_else(|| cwd.join(&config.changelog.file));
        info!(path = %path.display(), "checking changelog");

        let content = std::fs::read_to_string(&path)?;
        let parser = DocumentParser::new().with_title(&config.changelog.title);
        let canonical = parser.parse(&content)?.render_string();

        if canonical != content {
            bail!("{} is not in canonical form; run `relog fmt --write`", path.display());
        }

        if !cli.quiet {
            println!("{} {} is canonical", style("✓").green(), path.display());
        }
        Ok(())
    }
}
