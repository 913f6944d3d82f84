//! One-shot search command.

use crate::cmd::{CLI_SESSION, ModelRef, load};
use anyhow::Result;
use std::path::Path;
use websearch::{OutputFormat, SearchArgs, StaticDirectory, WebSearch};

/// Build tool arguments from command line flags.
///
/// Empty domain lists count as absent.
pub fn args(
    query: String,
    allowed_domains: Vec<String>,
    blocked_domains: Vec<String>,
    max_uses: Option<u8>,
) -> SearchArgs {
    SearchArgs {
        query,
        allowed_domains: (!allowed_domains.is_empty()).then_some(allowed_domains),
        blocked_domains: (!blocked_domains.is_empty()).then_some(blocked_domains),
        max_uses,
    }
}

/// Run one search and print the rendered result.
pub async fn run(
    path: &Path,
    model: Option<&ModelRef>,
    args: &SearchArgs,
    format: Option<OutputFormat>,
) -> Result<()> {
    let config = load(path)?;
    let format = format.unwrap_or(config.format);
    let tool = WebSearch::new(StaticDirectory::new(config.providers)).with_format(format);
    if let Some(model) = model {
        tool.on_session_model_change(CLI_SESSION, &model.model, &model.provider);
    }

    println!("{}", tool.search(CLI_SESSION, args).await);
    Ok(())
}
