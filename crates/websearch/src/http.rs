//! Shared HTTP transport for the search executors.
//!
//! `Endpoint` wraps a `reqwest::Client` with pre-built headers and the
//! target URL. Status and body handling is shared so both families report
//! upstream failures the same way.

use crate::error::SearchError;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};

/// A JSON POST endpoint with fixed headers.
#[derive(Clone)]
pub struct Endpoint {
    client: Client,
    headers: HeaderMap,
    url: String,
}

impl Endpoint {
    /// Endpoint with Bearer token authentication.
    pub fn bearer(client: Client, key: &str, url: &str) -> Result<Self, SearchError> {
        Self::custom_header(client, header::AUTHORIZATION.as_str(), &format!("Bearer {key}"), url)
    }

    /// Endpoint with a custom authentication header (e.g. `x-api-key`).
    pub fn custom_header(
        client: Client,
        name: &str,
        value: &str,
        url: &str,
    ) -> Result<Self, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let name = name
            .parse::<HeaderName>()
            .map_err(|e| SearchError::Setup(format!("invalid header name '{name}': {e}")))?;
        let value = value
            .parse::<HeaderValue>()
            .map_err(|e| SearchError::Setup(format!("invalid API key: {e}")))?;
        headers.insert(name, value);
        Ok(Self {
            client,
            headers,
            url: url.to_owned(),
        })
    }

    /// Add a fixed header.
    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
        self
    }

    /// POST `body` and decode the JSON response.
    ///
    /// Non-success statuses become [`SearchError::Api`]; a success body that
    /// is not JSON becomes [`SearchError::Unexpected`].
    pub async fn send<T: DeserializeOwned>(&self, body: &impl Serialize) -> Result<T, SearchError> {
        tracing::trace!("request: {}", serde_json::to_string(body)?);
        let response = self
            .client
            .request(Method::POST, &self.url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::trace!("response: {text}");
        if !status.is_success() {
            return Err(SearchError::api(status.as_u16(), &text));
        }

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|_| SearchError::Unexpected(text.trim().to_owned()))?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
