//! CLI argument parsing and subcommand dispatch.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use websearch::{OutputFormat, WebSearchConfig, config};

pub mod resolve;
pub mod search;
pub mod serve;

/// Session id used for one-shot commands.
pub const CLI_SESSION: &str = "cli";

/// Web search through provider-hosted search tools.
#[derive(Parser, Debug)]
#[command(name = "walrus-websearch", about = "Web search through provider-hosted search tools")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Config file path (defaults to ./websearch.toml, then the global
    /// config).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one web search and print the result.
    Search {
        /// Search query.
        query: String,
        /// Active model as `provider/model`.
        #[arg(long)]
        model: Option<ModelRef>,
        /// Only include results from this domain (repeatable).
        #[arg(long = "allowed-domain")]
        allowed_domains: Vec<String>,
        /// Exclude results from this domain (repeatable).
        #[arg(long = "blocked-domain")]
        blocked_domains: Vec<String>,
        /// Maximum number of searches the provider may run.
        #[arg(long)]
        max_uses: Option<u8>,
        /// Output format, overriding the config file.
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Print which provider and model a search would use.
    Resolve {
        /// Active model as `provider/model`.
        #[arg(long)]
        model: Option<ModelRef>,
    },
    /// Serve line-delimited JSON requests on stdio.
    Serve {
        /// Output format for search results.
        #[arg(long, default_value_t)]
        format: OutputFormat,
    },
}

/// A `provider/model` reference.
///
/// A bare model id leaves the provider empty; the directory then matches
/// on the model id alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    /// Provider identifier, possibly empty.
    pub provider: CompactString,
    /// Model identifier.
    pub model: CompactString,
}

impl std::str::FromStr for ModelRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (provider, model) = s.split_once('/').unwrap_or(("", s));
        if model.is_empty() {
            return Err(format!("missing model id in '{s}'"));
        }
        Ok(Self {
            provider: provider.into(),
            model: model.into(),
        })
    }
}

impl Cli {
    /// Dispatch the parsed command.
    pub async fn run(self) -> Result<()> {
        let path = config_path(self.config.as_deref())?;
        match self.command {
            Command::Search {
                query,
                model,
                allowed_domains,
                blocked_domains,
                max_uses,
                format,
            } => {
                let args = search::args(query, allowed_domains, blocked_domains, max_uses);
                search::run(&path, model.as_ref(), &args, format).await
            }
            Command::Resolve { model } => resolve::run(&path, model.as_ref()).await,
            Command::Serve { format } => serve::run(&path, format).await,
        }
    }
}

/// Pick the config file: the explicit path, `./websearch.toml`, or the
/// global config.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_owned());
    }

    let local = PathBuf::from(config::CONFIG_FILE);
    if local.exists() {
        return Ok(local);
    }

    match config::global_config_path() {
        Some(path) => Ok(path),
        None => bail!("no config file given and no platform config directory found"),
    }
}

/// Load the config file for a one-shot command.
pub(crate) fn load(path: &Path) -> Result<WebSearchConfig> {
    tracing::debug!(path = %path.display(), "loading web search config");
    WebSearchConfig::load(path)
}
