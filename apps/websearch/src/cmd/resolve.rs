//! Resolution preview command.

use crate::cmd::{CLI_SESSION, ModelRef, load};
use anyhow::{Result, bail};
use std::path::Path;
use websearch::{StaticDirectory, WebSearch};

/// Print the provider and model a search would use.
pub async fn run(path: &Path, model: Option<&ModelRef>) -> Result<()> {
    let config = load(path)?;
    let tool = WebSearch::new(StaticDirectory::new(config.providers));
    if let Some(model) = model {
        tool.on_session_model_change(CLI_SESSION, &model.model, &model.provider);
    }

    let resolved = match tool.resolve(CLI_SESSION).await {
        Ok(resolved) => resolved,
        Err(message) => bail!("{message}"),
    };
    println!("family:   {}", resolved.family);
    println!("model:    {}", resolved.model_id);
    println!("reason:   {}", reason(resolved.reason));
    println!(
        "endpoint: {}",
        resolved
            .credentials
            .base_url
            .as_deref()
            .unwrap_or("(vendor default)")
    );
    Ok(())
}

fn reason(reason: resolver::Reason) -> &'static str {
    match reason {
        resolver::Reason::Locked => "locked (web_search = \"always\")",
        resolver::Reason::Passthrough => "active model",
        resolver::Reason::Fallback => "fallback (web_search = \"auto\")",
    }
}
