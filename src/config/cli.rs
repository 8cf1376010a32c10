use crate::config::toml_config::DirectoryConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pitch-directory")]
#[command(about = "Browse, rank and validate startup pitches")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON endpoint returning listings (overrides the config file)
    #[arg(long, global = true, conflicts_with = "file")]
    pub endpoint: Option<String>,

    /// JSON file of listings (overrides the config file)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Show an empty directory instead of failing when the source is down
    #[arg(long, global = true)]
    pub fallback_empty: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List startups, newest first unless told otherwise
    List {
        /// newest, oldest, most_viewed (views) or most_liked (likes)
        #[arg(long)]
        sort: Option<String>,

        /// Only show this category ("all" shows everything)
        #[arg(long)]
        category: Option<String>,

        /// Reference time for relative ages, RFC 3339 (defaults to now)
        #[arg(long)]
        now: Option<String>,
    },

    /// Totals and the most viewed startup
    Stats,

    /// Check a submission without sending it anywhere
    Validate {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        pitch: String,
        #[arg(long)]
        link: Option<String>,
    },

    /// Toggle a user's like in a comma-separated list of user ids
    Like {
        #[arg(long, value_delimiter = ',')]
        likes: Vec<String>,
        #[arg(long)]
        user: String,
    },

    /// Print the standard startup categories
    Categories,
}

impl Command {
    /// Whether the command reads listings from a source.
    pub fn needs_source(&self) -> bool {
        matches!(self, Command::List { .. } | Command::Stats)
    }
}

impl CliConfig {
    /// Load the config file (if any), then apply command line overrides.
    pub fn resolve(&self) -> Result<DirectoryConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                DirectoryConfig::from_file(path)?
            }
            None => DirectoryConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = Some(endpoint.clone());
            config.source.file = None;
        }
        if let Some(file) = &self.file {
            config.source.file = Some(file.clone());
            config.source.endpoint = None;
        }
        if self.fallback_empty {
            config.source.fallback_to_empty = true;
        }

        if self.command.needs_source() {
            config.validate()?;
        }

        Ok(config)
    }
}
