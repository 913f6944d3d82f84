//! Provider directory collaborators.
//!
//! The directory is queried lazily on the first search, never at startup:
//! the host may not be able to answer while it is still bootstrapping.

use crate::config::WebSearchConfig;
use anyhow::Result;
use resolver::ProviderEntry;
use std::path::PathBuf;

/// Source of the configured providers and their models.
pub trait ProviderDirectory: Send + Sync {
    /// List providers in resolution order.
    fn providers(&self) -> impl Future<Output = Result<Vec<ProviderEntry>>> + Send;
}

/// A fixed provider list handed over by the host.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    entries: Vec<ProviderEntry>,
}

impl StaticDirectory {
    /// Wrap a provider list.
    pub fn new(entries: Vec<ProviderEntry>) -> Self {
        Self { entries }
    }
}

impl ProviderDirectory for StaticDirectory {
    async fn providers(&self) -> Result<Vec<ProviderEntry>> {
        Ok(self.entries.clone())
    }
}

/// Reads the providers from a TOML config file at query time.
#[derive(Debug, Clone)]
pub struct FileDirectory {
    path: PathBuf,
}

impl FileDirectory {
    /// Directory backed by the config file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ProviderDirectory for FileDirectory {
    async fn providers(&self) -> Result<Vec<ProviderEntry>> {
        let path = self.path.clone();
        let config = tokio::task::spawn_blocking(move || WebSearchConfig::load(&path)).await??;
        tracing::debug!(
            path = %self.path.display(),
            providers = config.providers.len(),
            "read provider directory"
        );
        Ok(config.providers)
    }
}
