//! Anthropic search executor.
//!
//! Runs the query through the Messages API with the server-side
//! `web_search` tool and walks the returned content blocks.

use crate::{
    args::SearchOptions,
    error::SearchError,
    http::Endpoint,
    output::SearchOutput,
};
use reqwest::Client;
pub use request::Request;
use response::MessagesResponse;

mod request;
mod response;

/// Default Anthropic API base URL, without a version segment.
pub const BASE_URL: &str = "https://api.anthropic.com";

/// Messages API path appended to the base URL.
const MESSAGES_PATH: &str = "/v1/messages";

/// The Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

/// Search executor for the Anthropic family.
#[derive(Clone)]
pub struct Claude {
    endpoint: Endpoint,
}

impl Claude {
    /// Create an executor targeting the Anthropic API.
    pub fn anthropic(client: Client, key: &str) -> Result<Self, SearchError> {
        Self::custom(client, key, BASE_URL)
    }

    /// Create an executor targeting an Anthropic-compatible base URL.
    pub fn custom(client: Client, key: &str, base_url: &str) -> Result<Self, SearchError> {
        let url = format!("{}{MESSAGES_PATH}", base_url.trim_end_matches('/'));
        let endpoint = Endpoint::custom_header(client, "x-api-key", key, &url)?
            .with_header("anthropic-version", API_VERSION);
        Ok(Self { endpoint })
    }

    /// The transport endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Run one search with `model`.
    pub async fn search(
        &self,
        model: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutput, SearchError> {
        let request = Request::search(model, query, options);
        let response: MessagesResponse = self.endpoint.send(&request).await?;
        Ok(SearchOutput::from_blocks(query, response.into_blocks()))
    }
}
