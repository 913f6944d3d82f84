//! Dispatch errors and their user-facing rendering.
//!
//! Nothing here is ever raised to the host: the tool surface converts every
//! failure to a string with [`format_error`] or [`unresolved_message`].

use crate::config::EXAMPLE_CONFIG;
use resolver::{ActiveModel, Family, Unresolved};
use serde_json::Value;
use thiserror::Error;

/// Failure of one upstream search call.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The provider answered with a non-success status.
    #[error("{message} (status {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider-reported message, or the raw body.
        message: String,
    },
    /// Transport failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// JSON body that does not match the expected response shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Client-side setup failure, such as a key that is not a valid header.
    #[error("{0}")]
    Setup(String),
    /// A success response whose body is not JSON, kept verbatim.
    #[error("{0}")]
    Unexpected(String),
}

impl SearchError {
    /// Build an API error from a non-success response body.
    ///
    /// Both vendors report `{"error": {"message": ...}}`; anything else is
    /// passed through as text.
    pub fn api(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| {
                v.pointer("/error/message")
                    .or_else(|| v.get("error"))
                    .or_else(|| v.get("message"))
            })
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| {
                let body = body.trim();
                if body.is_empty() {
                    "no response body".to_owned()
                } else {
                    body.to_owned()
                }
            });
        Self::Api { status, message }
    }
}

/// Render a dispatch error for the caller.
///
/// API errors carry the status; generic errors carry their message; a
/// non-JSON payload is stringified as-is.
pub fn format_error(family: Family, error: &SearchError) -> String {
    let vendor = family.vendor();
    match error {
        SearchError::Api { status, message } => {
            format!("{vendor} API error: {message} (status {status})")
        }
        SearchError::Http(_) | SearchError::Decode(_) | SearchError::Setup(_) => {
            format!("{vendor} web search failed: {error}")
        }
        SearchError::Unexpected(raw) => {
            format!("{vendor} web search returned an unexpected response: {raw}")
        }
    }
}

/// Render a configuration error with an example config.
pub fn unresolved_message(reason: Unresolved, active: Option<&ActiveModel>) -> String {
    let problem = match (reason, active) {
        (Unresolved::NoCredentials, _) => "Web search is not configured: no Anthropic or OpenAI \
             provider has an API key (set `key` or `options.api_key`)."
            .to_owned(),
        (Unresolved::MissingCredentials(family), Some(active)) => format!(
            "Web search cannot use the active model '{}' ({}): no {} provider has an API key.",
            active.model_id,
            active.provider_id,
            family.vendor()
        ),
        (Unresolved::MissingCredentials(family), None) => format!(
            "Web search cannot run: no {} provider has an API key.",
            family.vendor()
        ),
        (Unresolved::UnsupportedModel, Some(active)) => format!(
            "Web search does not support the active model '{}' ({}) and no model is tagged \
             `web_search = \"auto\"` as a fallback.",
            active.model_id, active.provider_id
        ),
        (Unresolved::UnsupportedModel, None) => "Web search has no active model for this \
             session and no model is tagged `web_search = \"auto\"` or `\"always\"`."
            .to_owned(),
    };
    format!("{problem}\n\nExample configuration:\n\n```toml\n{EXAMPLE_CONFIG}\n```")
}
