//! Web search configuration loaded from TOML.

use crate::utils::expand_env_vars;
use anyhow::{Context, Result};
use resolver::ProviderEntry;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "walrus";
/// Config file name.
pub const CONFIG_FILE: &str = "websearch.toml";

/// Example configuration shown in configuration error messages.
pub const EXAMPLE_CONFIG: &str = r#"[[providers]]
id = "anthropic"
api = "anthropic"
key = "${ANTHROPIC_API_KEY}"

[[providers.models]]
id = "claude-sonnet-4-5"
options = { web_search = "auto" }"#;

/// Resolve the global config path (`~/.config/walrus/websearch.toml` on
/// linux).
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Top-level web search configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WebSearchConfig {
    /// How results are rendered for the caller.
    #[serde(default)]
    pub format: OutputFormat,
    /// Provider directory, in resolution order.
    #[serde(default)]
    pub providers: Vec<ProviderEntry>,
}

impl WebSearchConfig {
    /// Parse a TOML string, expanding `${VAR}` references first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        toml::from_str(&expanded).context("invalid web search config")
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }
}

/// Rendering of search results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Narrative followed by a `Sources` section.
    #[default]
    Markdown,
    /// The normalized output serialized as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (markdown, json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
        })
    }
}
