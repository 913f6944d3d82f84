//! Web search tool backed by provider-hosted search.
//!
//! [`WebSearch`] is the tool surface a host registers. For every call it
//! resolves a provider and model through [`resolver`] (the provider
//! directory is scanned once, lazily), dispatches to the family executor
//! ([`claude`] or [`openai`]) and renders the [`SearchOutput`] as text.
//! Every failure comes back as a descriptive string, never as an error.

pub use {
    args::{ArgsError, DEFAULT_MAX_USES, SearchArgs, SearchOptions},
    config::{OutputFormat, WebSearchConfig},
    directory::{FileDirectory, ProviderDirectory, StaticDirectory},
    dispatch::{Executor, execute},
    error::{SearchError, format_error, unresolved_message},
    http::Endpoint,
    output::{Block, Hit, HitList, SearchOutput, Segment},
    tool::WebSearch,
};

pub mod args;
pub mod claude;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod openai;
pub mod output;
pub mod tool;
mod utils;
