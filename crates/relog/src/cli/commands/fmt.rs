//! Fmt command

use clap::Args;
use console::style;
use tracing::info;

use relog_changelog::DocumentParser;
use relog_core::config::load_config_or_default;

use crate::cli::Cli;

/// Rewrite a changelog document into canonical form
#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Changelog file (defaults to the configured file)
    pub file: Option<std::path::PathBuf>,

    /// Write the result back instead of printing to stdout
    #[arg(short, long)]
    pub write: bool,
}

impl FmtCommand {
    /// Execute the fmt command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let path = self
            .file
            .clone()
            .unwrap_or_else(|| cwd.join(&config.changelog.file));
        info!(path = %path.display(), write = self.write, "formatting changelog");

        let content = std::fs::read_to_string(&path)?;
        let parser = DocumentParser::new().with_title(&config.changelog.title);
        let log = parser.parse(&content)?;
        let canonical = log.render_string();

        if self.write {
            std::fs::write(&path, &canonical)?;
            if !cli.quiet {
                println!(
                    "{} Wrote canonical changelog to {}",
                    style("✓").green(),
                    path.display()
                );
            }
        } else {
            print!("{}", canonical);
        }

        Ok(())
    }
}
