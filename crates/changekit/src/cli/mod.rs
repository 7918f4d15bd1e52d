//! CLI definition and command handling

pub mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use changekit_changelog::{Converter, FormatterRegistry, ParserOptions, ParserRegistry};
use changekit_core::config::{load_config, load_config_or_default, validate_config};
use changekit_core::Config;

/// Changekit - convert changelogs between RST release notes and YAML entries
#[derive(Debug, Parser)]
#[command(name = "changekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input changelog (.rst or .yml)
    pub infile: PathBuf,

    /// Output changelog (.rst or .yml)
    pub outfile: PathBuf,

    /// Reflow RST entry text to this width instead of keeping its lines
    #[arg(long, value_name = "WIDTH")]
    pub line_width: Option<usize>,

    /// Stop reading after this many entries
    #[arg(long, value_name = "COUNT")]
    pub max_entries: Option<usize>,

    /// Print the subpackages, releases and entry types found
    #[arg(long)]
    pub print_info: bool,

    /// Write YAML as a bare entries list
    #[arg(long)]
    pub flat: bool,

    /// Layout configuration file (.toml or .yaml)
    #[arg(short, long, value_name = "PATH", env = "CHANGEKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format for --print-info
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Run the conversion
    pub fn execute(&self) -> anyhow::Result<()> {
        info!(
            infile = %self.infile.display(),
            outfile = %self.outfile.display(),
            "executing convert"
        );

        let config = self.load_config()?;
        let parsers = ParserRegistry::with_config(config.layout.clone(), self.parser_options());
        let formatters = FormatterRegistry::with_config(&config);

        let converter = Converter::for_paths(&self.infile, &self.outfile, &parsers, &formatters)?;
        let changelog = converter
            .convert_file(&self.infile, &self.outfile)
            .with_context(|| {
                format!(
                    "failed to convert {} to {}",
                    self.infile.display(),
                    self.outfile.display()
                )
            })?;

        if !self.quiet {
            output::success(&format!(
                "Wrote {} entries to {}",
                changelog.entries.len(),
                output::path_style().apply_to(self.outfile.display())
            ));
        }

        if self.print_info {
            output::print_info(&changelog.uniques(), self.format)?;
        }

        Ok(())
    }

    /// Configuration file (explicit or discovered from the working directory)
    /// with command-line overrides
    fn load_config(&self) -> anyhow::Result<Config> {
        let cwd = std::env::current_dir()?;
        self.load_config_from(&cwd)
    }

    fn load_config_from(&self, dir: &Path) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => {
                let (config, path) = load_config_or_default(dir).with_context(|| {
                    format!("failed to load config discovered from {}", dir.display())
                })?;
                if let Some(path) = path {
                    debug!(path = %path.display(), "using discovered config");
                }
                config
            }
        };

        if self.line_width.is_some() {
            config.markup.line_width = self.line_width;
        }
        if self.flat {
            config.data.flat = true;
        }

        validate_config(&config)?;
        debug!(?config, "effective config");
        Ok(config)
    }

    fn parser_options(&self) -> ParserOptions {
        match self.max_entries {
            Some(max) => ParserOptions::new().with_max_entries(max),
            None => ParserOptions::new(),
        }
    }
}
