//! Responses API output walking.

use crate::output::{Block, Hit};
use compact_str::CompactString;
use serde::Deserialize;

/// Raw Responses API result, reduced to what search needs.
#[derive(Deserialize)]
pub(super) struct ResponsesResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    WebSearchCall {
        #[serde(default)]
        id: CompactString,
        #[serde(default)]
        status: CompactString,
        #[serde(default)]
        action: Option<Action>,
    },
    Message {
        #[serde(default)]
        id: CompactString,
        #[serde(default)]
        content: Vec<MessageContent>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct Action {
    #[serde(default)]
    sources: Vec<Source>,
}

#[derive(Deserialize)]
struct Source {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum MessageContent {
    OutputText {
        #[serde(default)]
        text: String,
        #[serde(default)]
        annotations: Vec<Annotation>,
    },
    Refusal {
        #[serde(default)]
        refusal: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Annotation {
    UrlCitation {
        #[serde(default)]
        url: String,
        #[serde(default)]
        title: String,
    },
    #[serde(other)]
    Other,
}

impl ResponsesResponse {
    /// Convert output items to normalized blocks, in order.
    pub(super) fn into_blocks(self) -> Vec<Block> {
        let mut blocks = Vec::new();
        for item in self.output {
            match item {
                OutputItem::WebSearchCall { id, status, .. } if status == "failed" => {
                    blocks.push(Block::Error {
                        code: CompactString::const_new("search_failed"),
                    });
                    tracing::debug!(%id, "web search call failed");
                }
                OutputItem::WebSearchCall { id, action, .. } => {
                    let hits: Vec<Hit> = action
                        .map(|a| a.sources)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|s| Hit::new(s.title.unwrap_or_default(), s.url))
                        .collect();
                    blocks.push(Block::Hits {
                        tool_use_id: id,
                        hits,
                    });
                }
                OutputItem::Message { id, content } => {
                    for part in content {
                        match part {
                            MessageContent::OutputText { text, annotations } => {
                                blocks.push(Block::Text(text));
                                let hits: Vec<Hit> = annotations
                                    .into_iter()
                                    .filter_map(|a| match a {
                                        Annotation::UrlCitation { url, title } => {
                                            Some(Hit::new(title, url))
                                        }
                                        Annotation::Other => None,
                                    })
                                    .collect();
                                if !hits.is_empty() {
                                    blocks.push(Block::Hits {
                                        tool_use_id: id.clone(),
                                        hits,
                                    });
                                }
                            }
                            MessageContent::Refusal { refusal } => {
                                blocks.push(Block::Text(refusal));
                            }
                            MessageContent::Other => {}
                        }
                    }
                }
                OutputItem::Other => {}
            }
        }
        blocks
    }
}
