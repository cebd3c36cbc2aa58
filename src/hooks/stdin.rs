// src/hooks/stdin.rs

//! Line protocol for receiving hook firings from a host process.
//!
//! Each line is `hookName [param ...]`, whitespace separated. Blank lines
//! and lines starting with `#` are ignored.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::command::EventParams;
use crate::engine::RuntimeEvent;
use crate::errors::HookshellError;

use super::table::HookTable;

/// Split a protocol line into hook name and parameters.
pub fn parse_line(line: &str) -> Option<(String, EventParams)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut tokens = line.split_whitespace();
    let hook = tokens.next()?.to_string();
    Some((hook, tokens.map(str::to_string).collect()))
}

/// Read protocol lines from `reader` and fire them on `table`.
///
/// Sends `SourceClosed` once the reader reaches EOF.
pub fn spawn_line_reader<R>(
    reader: R,
    table: HookTable,
    events: mpsc::Sender<RuntimeEvent>,
) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "failed to read hook input; closing event source");
                    break;
                }
            };

            let Some((hook, params)) = parse_line(&line) else {
                continue;
            };

            match table.fire(&hook, params).await {
                Ok(0) => debug!(hook = %hook, "hook fired with no subscribers"),
                Ok(_) => {}
                Err(HookshellError::UnknownHook(name)) => {
                    warn!(hook = %name, "ignoring unknown hook");
                }
                Err(e) => {
                    debug!(error = %e, "runtime gone; stopping hook input");
                    return;
                }
            }
        }

        info!("hook input closed");
        let _ = events.send(RuntimeEvent::SourceClosed).await;
    })
}
