//! Upstream API families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A search-capable upstream API shape.
///
/// Ordering is the fixed precedence used when scanning for locked and
/// fallback models: Anthropic first, then OpenAI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Anthropic Messages API with the server-side `web_search` tool.
    #[serde(rename = "anthropic")]
    Anthropic,
    /// OpenAI Responses API with the hosted `web_search` tool.
    #[serde(rename = "openai")]
    OpenAI,
}

impl Family {
    /// Families in resolution order.
    pub const ORDER: [Family; 2] = [Family::Anthropic, Family::OpenAI];

    /// Match an API shape identifier.
    ///
    /// Accepts both bare names and the npm package names hosts commonly
    /// record for custom providers.
    pub fn from_api(api: &str) -> Option<Self> {
        match api.trim() {
            "anthropic" | "@ai-sdk/anthropic" => Some(Self::Anthropic),
            "openai" | "@ai-sdk/openai" => Some(Self::OpenAI),
            _ => None,
        }
    }

    /// Config identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAI => "openai",
        }
    }

    /// Vendor name for user-facing messages.
    pub fn vendor(&self) -> &'static str {
        match self {
            Self::Anthropic => "Anthropic",
            Self::OpenAI => "OpenAI",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a model's API shape identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One of the supported families.
    Known(Family),
    /// Missing or unknown identifier. Such models are recorded in the
    /// directory but never resolved.
    Unrecognized,
}

impl Shape {
    /// Classify an optional identifier.
    pub fn parse(api: Option<&str>) -> Self {
        api.and_then(Family::from_api)
            .map_or(Self::Unrecognized, Self::Known)
    }

    /// The family, if recognized.
    pub fn family(&self) -> Option<Family> {
        match self {
            Self::Known(family) => Some(*family),
            Self::Unrecognized => None,
        }
    }
}
