//! Line-delimited JSON server on stdio.
//!
//! Each input line is one [`Request`]. Searches answer with one
//! [`Reply`] line; session events are silent. Malformed lines are logged
//! and skipped. Searches run concurrently and share only the tool's
//! memoized scan and session table.

use anyhow::Result;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{path::Path, sync::Arc};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader},
    task::JoinSet,
};
use websearch::{FileDirectory, OutputFormat, ProviderDirectory, WebSearch};

/// One input line.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// A session switched models.
    SessionModel {
        /// Session identifier.
        session_id: CompactString,
        /// New active model.
        model_id: CompactString,
        /// Provider the model was picked from.
        provider_id: CompactString,
    },
    /// A session ended.
    SessionClosed {
        /// Session identifier.
        session_id: CompactString,
    },
    /// A tool call.
    Search {
        /// Caller-chosen id echoed in the reply.
        #[serde(default)]
        id: Value,
        /// Session the call belongs to.
        session_id: CompactString,
        /// Raw tool arguments.
        args: Value,
    },
}

/// Answer to a search request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Reply {
    /// The request id.
    pub id: Value,
    /// Rendered result or error text.
    pub output: String,
}

/// A search read from the input, not yet run.
#[derive(Debug)]
pub struct PendingSearch {
    /// Caller-chosen id echoed in the reply.
    pub id: Value,
    /// Session the call belongs to.
    pub session_id: CompactString,
    /// Raw tool arguments.
    pub args: Value,
}

impl PendingSearch {
    /// Run the search and wrap the result for the caller.
    pub async fn run<D: ProviderDirectory>(self, tool: &WebSearch<D>) -> Reply {
        Reply {
            output: tool.call(&self.session_id, self.args).await,
            id: self.id,
        }
    }
}

/// Serve stdin/stdout with the providers in `path`.
///
/// The config file is read on the first search, not at startup.
pub async fn run(path: &Path, format: OutputFormat) -> Result<()> {
    let tool = Arc::new(WebSearch::new(FileDirectory::new(path)).with_format(format));
    tracing::info!(config = %path.display(), "serving web search on stdio");
    serve(
        tool,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}

/// Process requests from `reader` until EOF.
///
/// Session events are applied in input order as they are read. Each search
/// runs on its own task and its reply is written when it finishes, so
/// replies may come back out of input order.
pub async fn serve<D, R, W>(tool: Arc<WebSearch<D>>, reader: R, mut writer: W) -> Result<()>
where
    D: ProviderDirectory + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut searches = JoinSet::new();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Some(search) = accept(&tool, &line) {
                    let tool = tool.clone();
                    searches.spawn(async move { search.run(&tool).await });
                }
            }
            Some(done) = searches.join_next(), if !searches.is_empty() => {
                write_reply(&mut writer, &done?).await?;
            }
        }
    }

    while let Some(done) = searches.join_next().await {
        write_reply(&mut writer, &done?).await?;
    }
    Ok(())
}

/// Parse one input line and apply session events.
///
/// Returns the search the line asks for, if any.
pub fn accept<D: ProviderDirectory>(tool: &WebSearch<D>, line: &str) -> Option<PendingSearch> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("skipping malformed request: {e}");
            return None;
        }
    };

    match request {
        Request::SessionModel {
            session_id,
            model_id,
            provider_id,
        } => {
            tool.on_session_model_change(&session_id, &model_id, &provider_id);
            None
        }
        Request::SessionClosed { session_id } => {
            tool.on_session_closed(&session_id);
            None
        }
        Request::Search {
            id,
            session_id,
            args,
        } => Some(PendingSearch {
            id,
            session_id,
            args,
        }),
    }
}

/// Handle one input line in place, returning the reply for searches.
pub async fn handle_line<D: ProviderDirectory>(tool: &WebSearch<D>, line: &str) -> Option<Reply> {
    let search = accept(tool, line)?;
    Some(search.run(tool).await)
}

async fn write_reply<W: AsyncWrite + Unpin>(writer: &mut W, reply: &Reply) -> Result<()> {
    let mut out = serde_json::to_string(reply)?;
    out.push('\n');
    writer.write_all(out.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
