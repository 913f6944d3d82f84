//! OpenAI search executor.
//!
//! Runs the query through the Responses API with the hosted `web_search`
//! tool. Hits come from the search call's `action.sources` and from
//! `url_citation` annotations on the message text.

use crate::{
    args::SearchOptions,
    error::SearchError,
    http::Endpoint,
    output::SearchOutput,
};
use reqwest::Client;
pub use request::Request;
use response::ResponsesResponse;

mod request;
mod response;

/// Default OpenAI API base URL, without a version segment.
pub const BASE_URL: &str = "https://api.openai.com";

/// Responses API path appended to the base URL.
const RESPONSES_PATH: &str = "/v1/responses";

/// Search executor for the OpenAI family.
#[derive(Clone)]
pub struct OpenAI {
    endpoint: Endpoint,
}

impl OpenAI {
    /// Create an executor targeting the OpenAI API.
    pub fn api(client: Client, key: &str) -> Result<Self, SearchError> {
        Self::custom(client, key, BASE_URL)
    }

    /// Create an executor targeting an OpenAI-compatible base URL.
    pub fn custom(client: Client, key: &str, base_url: &str) -> Result<Self, SearchError> {
        let url = format!("{}{RESPONSES_PATH}", base_url.trim_end_matches('/'));
        Ok(Self {
            endpoint: Endpoint::bearer(client, key, &url)?,
        })
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
        let response: ResponsesResponse = self.endpoint.send(&request).await?;
        Ok(SearchOutput::from_blocks(query, response.into_blocks()))
    }
}
