//! Tool call arguments and validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search sub-steps allowed when the caller does not set `max_uses`.
pub const DEFAULT_MAX_USES: u8 = 5;

/// Upper bound for `max_uses`.
const MAX_USES_LIMIT: u8 = 10;

/// Arguments of a web search tool call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchArgs {
    /// The search query to use.
    #[schemars(length(min = 2))]
    pub query: String,
    /// Only include search results from these domains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
    /// Never include search results from these domains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_domains: Option<Vec<String>>,
    /// Maximum number of searches the provider may run for this query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub max_uses: Option<u8>,
}

/// Family-agnostic search options handed to an executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Allowed domains, empty for no restriction.
    pub allowed_domains: Vec<String>,
    /// Blocked domains, empty for no restriction.
    pub blocked_domains: Vec<String>,
    /// Search sub-step budget.
    pub max_uses: u8,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            allowed_domains: Vec::new(),
            blocked_domains: Vec::new(),
            max_uses: DEFAULT_MAX_USES,
        }
    }
}

/// Request validation failures, reported to the caller as plain text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// Arguments did not match the schema.
    #[error("Invalid web search arguments: {0}")]
    Malformed(String),
    /// Query shorter than two characters, whitespace included.
    #[error("Invalid web search arguments: query must be at least 2 characters")]
    QueryTooShort,
    /// Both domain filters present.
    #[error(
        "Invalid web search arguments: allowed_domains and blocked_domains cannot be used together"
    )]
    ConflictingDomains,
    /// `max_uses` outside `1..=10`.
    #[error("Invalid web search arguments: max_uses must be between 1 and 10, got {0}")]
    MaxUsesOutOfRange(i64),
}

impl SearchArgs {
    /// Create arguments for a plain query.
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_owned(),
            ..Default::default()
        }
    }

    /// Parse and validate raw tool call arguments.
    pub fn parse(value: serde_json::Value) -> Result<Self, ArgsError> {
        // Report range problems before serde rejects the value as a u8.
        if let Some(max_uses) = value.get("max_uses").and_then(serde_json::Value::as_i64)
            && !(1..=i64::from(MAX_USES_LIMIT)).contains(&max_uses)
        {
            return Err(ArgsError::MaxUsesOutOfRange(max_uses));
        }

        let args: Self =
            serde_json::from_value(value).map_err(|e| ArgsError::Malformed(e.to_string()))?;
        args.validate()?;
        Ok(args)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ArgsError> {
        if self.query.chars().count() < 2 {
            return Err(ArgsError::QueryTooShort);
        }
        if self.allowed_domains.is_some() && self.blocked_domains.is_some() {
            return Err(ArgsError::ConflictingDomains);
        }
        if let Some(max_uses) = self.max_uses
            && !(1..=MAX_USES_LIMIT).contains(&max_uses)
        {
            return Err(ArgsError::MaxUsesOutOfRange(i64::from(max_uses)));
        }
        Ok(())
    }

    /// Split out the executor options.
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            allowed_domains: self.allowed_domains.clone().unwrap_or_default(),
            blocked_domains: self.blocked_domains.clone().unwrap_or_default(),
            max_uses: self.max_uses.unwrap_or(DEFAULT_MAX_USES),
        }
    }

    /// JSON schema of the arguments, for hosts that register tools.
    pub fn schema() -> serde_json::Value {
        schemars::schema_for!(SearchArgs).to_value()
    }
}
