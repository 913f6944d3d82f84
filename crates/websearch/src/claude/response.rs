//! Messages API response walking.

use crate::output::{Block, Hit};
use compact_str::CompactString;
use serde::Deserialize;

/// Raw Anthropic non-streaming response, reduced to what search needs.
#[derive(Deserialize)]
pub(super) struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    WebSearchToolResult {
        #[serde(default)]
        tool_use_id: CompactString,
        content: ToolResultContent,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ToolResultContent {
    Results(Vec<SearchResult>),
    Error(ToolResultError),
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
}

#[derive(Deserialize)]
struct ToolResultError {
    #[serde(default = "unknown_error")]
    error_code: CompactString,
}

fn unknown_error() -> CompactString {
    CompactString::const_new("unknown_error")
}

impl MessagesResponse {
    /// Convert content blocks to normalized blocks, in order.
    pub(super) fn into_blocks(self) -> Vec<Block> {
        self.content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(Block::Text(text)),
                ContentBlock::WebSearchToolResult {
                    tool_use_id,
                    content: ToolResultContent::Results(results),
                } => Some(Block::Hits {
                    tool_use_id,
                    hits: results
                        .into_iter()
                        .map(|r| Hit::new(r.title, r.url))
                        .collect(),
                }),
                ContentBlock::WebSearchToolResult {
                    content: ToolResultContent::Error(error),
                    ..
                } => Some(Block::Error {
                    code: error.error_code,
                }),
                ContentBlock::Other => None,
            })
            .collect()
    }
}
