//! The web search tool surface.

use crate::{
    args::SearchArgs,
    config::OutputFormat,
    directory::ProviderDirectory,
    dispatch,
    error::{format_error, unresolved_message},
};
use reqwest::Client;
use resolver::{ResolvedProvider, Scan, SessionModels};
use serde_json::Value;
use tokio::sync::OnceCell;

/// Web search tool shared by all sessions of a host.
///
/// The provider directory is scanned on the first call and the result is
/// kept for the life of the tool. Every entry point returns text.
pub struct WebSearch<D> {
    directory: D,
    scan: OnceCell<Scan>,
    sessions: SessionModels,
    client: Client,
    format: OutputFormat,
}

impl<D: ProviderDirectory> WebSearch<D> {
    /// Create the tool over a provider directory.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            scan: OnceCell::new(),
            sessions: SessionModels::new(),
            client: Client::new(),
            format: OutputFormat::default(),
        }
    }

    /// Set the output rendering.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Use a shared HTTP client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// The host reports that a session switched models.
    pub fn on_session_model_change(&self, session_id: &str, model_id: &str, provider_id: &str) {
        self.sessions
            .on_session_model_change(session_id, model_id, provider_id);
    }

    /// The host reports that a session ended.
    pub fn on_session_closed(&self, session_id: &str) {
        if self.sessions.remove(session_id).is_some() {
            tracing::debug!(session = session_id, "session closed");
        }
    }

    /// The provider directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// The active model tracker.
    pub fn sessions(&self) -> &SessionModels {
        &self.sessions
    }

    /// The memoized directory scan.
    ///
    /// A failed directory query is returned as text and retried on the next
    /// call.
    pub async fn scan(&self) -> Result<&Scan, String> {
        self.scan
            .get_or_try_init(|| async {
                let entries = self.directory.providers().await?;
                let scan = resolver::scan(&entries);
                tracing::info!(
                    families = scan.resolutions.len(),
                    models = scan.directory.len(),
                    "scanned provider directory"
                );
                Ok::<_, anyhow::Error>(scan)
            })
            .await
            .map_err(|e| {
                tracing::warn!("provider directory query failed: {e:#}");
                format!("Web search could not read the provider directory: {e:#}")
            })
    }

    /// Resolve the provider and model for a session.
    ///
    /// The error is the configuration message shown to the caller.
    pub async fn resolve(&self, session_id: &str) -> Result<ResolvedProvider, String> {
        let scan = self.scan().await?;
        let active = self.sessions.get(session_id);
        scan.resolve(active.as_ref())
            .ok_or_else(|| unresolved_message(scan.diagnose(active.as_ref()), active.as_ref()))
    }

    /// Handle a raw tool call.
    pub async fn call(&self, session_id: &str, args: Value) -> String {
        match SearchArgs::parse(args) {
            Ok(args) => self.run(session_id, &args).await,
            Err(e) => e.to_string(),
        }
    }

    /// Handle typed arguments.
    pub async fn search(&self, session_id: &str, args: &SearchArgs) -> String {
        if let Err(e) = args.validate() {
            return e.to_string();
        }
        self.run(session_id, args).await
    }

    /// JSON schema of the tool arguments.
    pub fn schema() -> Value {
        SearchArgs::schema()
    }

    async fn run(&self, session_id: &str, args: &SearchArgs) -> String {
        let resolved = match self.resolve(session_id).await {
            Ok(resolved) => resolved,
            Err(message) => return message,
        };

        match dispatch::execute(&self.client, &resolved, &args.query, &args.options()).await {
            Ok(output) => match self.format {
                OutputFormat::Markdown => output.to_markdown(),
                OutputFormat::Json => output.to_json(),
            },
            Err(e) => {
                tracing::warn!(family = %resolved.family, "web search failed: {e}");
                format_error(resolved.family, &e)
            }
        }
    }
}
