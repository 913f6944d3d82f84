//! Provider directory records.
//!
//! Entries mirror the host's provider listing. Identifiers are typed;
//! credentials and per-model settings live in JSON option bags that are
//! read defensively at scan time, so a malformed field degrades to "absent"
//! instead of failing the whole directory.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Per-model option carrying the web search [`Tag`].
pub const TAG_OPTION: &str = "web_search";

/// Provider option keys checked for an API key when `key` is unset.
const API_KEY_OPTIONS: [&str; 2] = ["api_key", "apiKey"];

/// Provider option keys checked for a base URL.
const BASE_URL_OPTIONS: [&str; 2] = ["base_url", "baseURL"];

/// One configured provider instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderEntry {
    /// Provider identifier as the host knows it (e.g. `"anthropic"`,
    /// `"my-proxy"`). Entries without one are skipped.
    #[serde(default)]
    pub id: CompactString,
    /// API shape identifier shared by the provider's models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<CompactString>,
    /// Direct API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Provider option bag (`api_key`, `base_url`, ...).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
    /// Models in configuration order.
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

impl ProviderEntry {
    /// Create an entry with an API shape identifier and no models.
    pub fn new(id: &str, api: &str) -> Self {
        Self {
            id: id.into(),
            api: Some(api.into()),
            ..Default::default()
        }
    }

    /// Set the direct API key.
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_owned());
        self
    }

    /// Set a provider option.
    pub fn with_option(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.options.insert(name.to_owned(), value.into());
        self
    }

    /// Append a model.
    pub fn with_model(mut self, model: ModelEntry) -> Self {
        self.models.push(model);
        self
    }

    /// Extract credentials: the direct key first, then the option bag.
    ///
    /// Empty strings count as absent. The base URL is normalized with
    /// [`normalize_base_url`].
    pub fn credentials(&self) -> Option<Credentials> {
        let api_key = self
            .key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| string_option(&self.options, &API_KEY_OPTIONS))?;

        let base_url = string_option(&self.options, &BASE_URL_OPTIONS).map(normalize_base_url);
        Some(Credentials {
            api_key: api_key.trim().to_owned(),
            base_url,
        })
    }
}

/// One model under a provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Model identifier sent upstream. Entries without one are skipped.
    #[serde(default)]
    pub id: CompactString,
    /// Per-model API shape override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<CompactString>,
    /// Per-model option bag.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl ModelEntry {
    /// Create an untagged model.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the web search tag.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.options
            .insert(TAG_OPTION.to_owned(), Value::String(tag.as_str().to_owned()));
        self
    }

    /// Override the API shape identifier for this model.
    pub fn with_api(mut self, api: &str) -> Self {
        self.api = Some(api.into());
        self
    }

    /// Read the web search tag. Unknown values read as [`Tag::None`].
    pub fn tag(&self) -> Tag {
        match self.options.get(TAG_OPTION) {
            None | Some(Value::Null) => Tag::None,
            Some(Value::String(value)) => Tag::parse(value).unwrap_or_else(|| {
                tracing::debug!(
                    model = %self.id,
                    value = %value,
                    "ignoring unknown web_search tag"
                );
                Tag::None
            }),
            Some(other) => {
                tracing::debug!(model = %self.id, %other, "ignoring non-string web_search tag");
                Tag::None
            }
        }
    }
}

/// Per-model web search tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tag {
    /// No override.
    #[default]
    None,
    /// Safety net when the active model's family is unsupported.
    Auto,
    /// Operator pin; wins regardless of the active model.
    Always,
}

impl Tag {
    /// Parse a tag value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "none" => Some(Self::None),
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            _ => None,
        }
    }

    /// Option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Auto => "auto",
            Self::Always => "always",
        }
    }
}

/// Resolved API credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API key.
    pub api_key: String,
    /// Normalized base URL override, without a trailing version segment.
    pub base_url: Option<String>,
}

impl Credentials {
    /// Credentials for the vendor's default endpoint.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_owned(),
            base_url: None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Strip a trailing slash and a trailing version segment from a base URL.
///
/// Vendor endpoints append their own `/v1/...` path, so `http://host/v1`,
/// `http://host/v1/` and `http://host` all normalize to `http://host`.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((head, last)) if is_version(last) && !head.ends_with('/') => {
            head.trim_end_matches('/').to_owned()
        }
        _ => trimmed.to_owned(),
    }
}

fn is_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn string_option<'a>(options: &'a Map<String, Value>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        options
            .get(*name)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    })
}
