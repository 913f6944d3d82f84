//! Request body for a Messages API search.

use crate::args::SearchOptions;
use serde::Serialize;
use serde_json::{Value, json};

/// Server tool type of the Anthropic web search tool.
const WEB_SEARCH_TOOL: &str = "web_search_20250305";

/// Output budget for the narrative around the search results.
const MAX_TOKENS: usize = 4096;

/// The request body for the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: usize,
    /// The messages array.
    pub messages: Vec<Value>,
    /// Tools available to the model: the web search server tool.
    pub tools: Vec<WebSearchTool>,
}

/// The `web_search` server tool definition.
#[derive(Debug, Clone, Serialize)]
pub struct WebSearchTool {
    /// Server tool version.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Tool name, always `web_search`.
    pub name: &'static str,
    /// Search sub-step budget.
    pub max_uses: u8,
    /// Only search these domains.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_domains: Vec<String>,
    /// Never search these domains.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocked_domains: Vec<String>,
}

impl Request {
    /// Build a single-turn search request.
    pub fn search(model: &str, query: &str, options: &SearchOptions) -> Self {
        Self {
            model: model.to_owned(),
            max_tokens: MAX_TOKENS,
            messages: vec![json!({
                "role": "user",
                "content": format!("Perform a web search for the query: {query}"),
            })],
            tools: vec![WebSearchTool {
                kind: WEB_SEARCH_TOOL,
                name: "web_search",
                max_uses: options.max_uses,
                allowed_domains: options.allowed_domains.clone(),
                blocked_domains: options.blocked_domains.clone(),
            }],
        }
    }
}
