//! Normalized search output.
//!
//! Executors translate their family's response into a sequence of
//! [`Block`]s; [`SearchOutput::from_blocks`] turns those into the uniform
//! shape, deduplicating hits by URL across the whole response and turning
//! upstream search errors into text so a partial result is still returned.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt::Write};

/// One search result hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Page title, possibly empty.
    pub title: String,
    /// Page URL.
    pub url: String,
}

impl Hit {
    /// Create a hit.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Hits returned by one upstream search sub-step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitList {
    /// Upstream id of the search call.
    pub tool_use_id: CompactString,
    /// Hits in upstream order.
    pub content: Vec<Hit>,
}

/// One entry of [`SearchOutput::results`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Narrative text.
    Text(String),
    /// Search hits.
    Hits(HitList),
}

/// Provider-agnostic content extracted from a raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Narrative text.
    Text(String),
    /// Hits from one search sub-step.
    Hits {
        /// Upstream id of the search call.
        tool_use_id: CompactString,
        /// Hits in upstream order.
        hits: Vec<Hit>,
    },
    /// A failed search sub-step.
    Error {
        /// Upstream error code or status.
        code: CompactString,
    },
}

/// The uniform result of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutput {
    /// The query as requested.
    pub query: String,
    /// Segments in the order they appeared upstream.
    pub results: Vec<Segment>,
}

impl SearchOutput {
    /// Normalize executor blocks.
    pub fn from_blocks(query: &str, blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for block in blocks {
            match block {
                Block::Text(text) => {
                    if !text.trim().is_empty() {
                        results.push(Segment::Text(text));
                    }
                }
                Block::Hits { tool_use_id, hits } => {
                    let content: Vec<Hit> = hits
                        .into_iter()
                        .filter(|hit| !hit.url.is_empty() && seen.insert(hit.url.clone()))
                        .collect();
                    if !content.is_empty() {
                        results.push(Segment::Hits(HitList {
                            tool_use_id,
                            content,
                        }));
                    }
                }
                Block::Error { code } => {
                    tracing::warn!(%code, "upstream web search sub-step failed");
                    results.push(Segment::Text(format!("Web search error: {code}")));
                }
            }
        }

        Self {
            query: query.to_owned(),
            results,
        }
    }

    /// All hits in order.
    pub fn hits(&self) -> impl Iterator<Item = &Hit> {
        self.results.iter().flat_map(|segment| match segment {
            Segment::Hits(list) => list.content.as_slice(),
            Segment::Text(_) => &[][..],
        })
    }

    /// Render as JSON text.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }

    /// Render as markdown with a trailing `Sources` section.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("Web search results for query: \"{}\"\n\n", self.query);

        let texts: Vec<&str> = self
            .results
            .iter()
            .filter_map(|segment| match segment {
                Segment::Text(text) => Some(text.trim()),
                Segment::Hits(_) => None,
            })
            .collect();
        if texts.is_empty() {
            out.push_str("No summary was returned.\n");
        } else {
            out.push_str(&texts.join("\n\n"));
            out.push('\n');
        }

        out.push_str("\n## Sources\n\n");
        let mut any = false;
        for hit in self.hits() {
            any = true;
            let title = if hit.title.trim().is_empty() {
                hit.url.as_str()
            } else {
                hit.title.trim()
            };
            let _ = writeln!(out, "- [{title}]({})", hit.url);
        }
        if !any {
            out.push_str("No sources were returned.\n");
        }
        out
    }
}
