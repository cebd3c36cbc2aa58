// src/exec/process_runner.rs

//! Per-process watcher task.

use tokio::process::Child;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::command::ProcessKey;
use crate::engine::RuntimeEvent;
use crate::supervisor::{ExitReport, ProcessId};

use super::signal::send_terminate;

/// Wait for `child` to exit and report it to the runtime.
///
/// - If a termination request arrives first, the termination signal is sent
///   and the watcher keeps waiting; the exit is still reported, carrying the
///   signal that ended the process.
/// - If the request sender is dropped without a request, nothing is sent and
///   the process is left to finish on its own.
pub async fn watch_process(
    id: ProcessId,
    key: ProcessKey,
    mut child: Child,
    mut terminate_rx: oneshot::Receiver<()>,
    events: mpsc::Sender<RuntimeEvent>,
) {
    let waited = tokio::select! {
        status = child.wait() => status,
        request = &mut terminate_rx => {
            if request.is_ok() {
                debug!(key = %key, id = %id, pid = ?child.id(), "sending termination signal");
                if let Err(e) = send_terminate(&mut child) {
                    warn!(key = %key, id = %id, error = %e, "failed to send termination signal");
                }
            }
            child.wait().await
        }
    };

    let event = match waited {
        Ok(status) => {
            let report = ExitReport::from_status(&status);
            debug!(key = %key, id = %id, ?report, "process exited");
            RuntimeEvent::ProcessExited { id, key, report }
        }
        Err(e) => RuntimeEvent::ProcessErrored {
            id,
            key,
            error: e.to_string(),
        },
    };

    if events.send(event).await.is_err() {
        debug!("runtime event channel closed; dropping exit notification");
    }
}
