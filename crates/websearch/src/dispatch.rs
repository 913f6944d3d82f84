//! Family dispatch.
//!
//! `Executor` is an enum over the concrete family executors, built from a
//! [`ResolvedProvider`] and a shared HTTP client.

use crate::{
    args::SearchOptions,
    claude::Claude,
    error::SearchError,
    openai::OpenAI,
    output::SearchOutput,
};
use reqwest::Client;
use resolver::{Family, ResolvedProvider};

/// A family-specific search executor.
#[derive(Clone)]
pub enum Executor {
    /// Anthropic Messages API with the `web_search` server tool.
    Claude(Claude),
    /// OpenAI Responses API with the hosted `web_search` tool.
    OpenAI(OpenAI),
}

impl Executor {
    /// Build the executor for a resolution.
    pub fn new(client: Client, resolved: &ResolvedProvider) -> Result<Self, SearchError> {
        let key = resolved.credentials.api_key.as_str();
        let base_url = resolved.credentials.base_url.as_deref();

        let executor = match resolved.family {
            Family::Anthropic => match base_url {
                Some(url) => Self::Claude(Claude::custom(client, key, url)?),
                None => Self::Claude(Claude::anthropic(client, key)?),
            },
            Family::OpenAI => match base_url {
                Some(url) => Self::OpenAI(OpenAI::custom(client, key, url)?),
                None => Self::OpenAI(OpenAI::api(client, key)?),
            },
        };
        Ok(executor)
    }

    /// The family this executor talks to.
    pub fn family(&self) -> Family {
        match self {
            Self::Claude(_) => Family::Anthropic,
            Self::OpenAI(_) => Family::OpenAI,
        }
    }

    /// Target URL of the executor.
    pub fn url(&self) -> &str {
        match self {
            Self::Claude(p) => p.endpoint().url(),
            Self::OpenAI(p) => p.endpoint().url(),
        }
    }

    /// Run one search.
    pub async fn search(
        &self,
        model: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutput, SearchError> {
        match self {
            Self::Claude(p) => p.search(model, query, options).await,
            Self::OpenAI(p) => p.search(model, query, options).await,
        }
    }
}

/// Run `query` against the resolved provider and model.
pub async fn execute(
    client: &Client,
    resolved: &ResolvedProvider,
    query: &str,
    options: &SearchOptions,
) -> Result<SearchOutput, SearchError> {
    let executor = Executor::new(client.clone(), resolved)?;
    tracing::debug!(
        family = %resolved.family,
        model = %resolved.model_id,
        url = executor.url(),
        "dispatching web search"
    );
    executor
        .search(&resolved.model_id, query, options)
        .await
}
