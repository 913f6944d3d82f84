//! Request body for a Responses API search.

use crate::args::SearchOptions;
use serde::Serialize;

/// Include key that makes the search call report its sources.
const INCLUDE_SOURCES: &str = "web_search_call.action.sources";

/// The request body for the OpenAI Responses API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// The user prompt.
    pub input: String,
    /// Tools available to the model: the hosted web search tool.
    pub tools: Vec<WebSearchTool>,
    /// Search sub-step budget.
    pub max_tool_calls: u8,
    /// Extra output to include in the response.
    pub include: Vec<&'static str>,
}

/// The hosted `web_search` tool definition.
#[derive(Debug, Clone, Serialize)]
pub struct WebSearchTool {
    /// Always `web_search`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Domain restriction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
}

/// Domain filters of the hosted search tool.
#[derive(Debug, Clone, Serialize)]
pub struct Filters {
    /// Only search these domains.
    pub allowed_domains: Vec<String>,
}

impl Request {
    /// Build a single-turn search request.
    ///
    /// The hosted tool has no block list, so blocked domains are stated in
    /// the prompt instead.
    pub fn search(model: &str, query: &str, options: &SearchOptions) -> Self {
        let mut input = format!("Perform a web search for the query: {query}");
        if !options.blocked_domains.is_empty() {
            input.push_str(&format!(
                "\n\nDo not use results from these domains: {}",
                options.blocked_domains.join(", ")
            ));
        }

        let filters = (!options.allowed_domains.is_empty()).then(|| Filters {
            allowed_domains: options.allowed_domains.clone(),
        });

        Self {
            model: model.to_owned(),
            input,
            tools: vec![WebSearchTool {
                kind: "web_search",
                filters,
            }],
            max_tool_calls: options.max_uses,
            include: vec![INCLUDE_SOURCES],
        }
    }
}
