// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::errors::{HookshellError, Result};
use crate::exec::ProcessLauncher;
use crate::hooks::Dispatcher;
use crate::supervisor::Supervisor;

use super::{RuntimeEvent, RuntimeOptions};

/// Drives the dispatcher and supervisor in response to `RuntimeEvent`s.
///
/// This is the single control flow of the program: hook firings and process
/// notifications are handled one at a time, in arrival order.
pub struct Runtime<L: ProcessLauncher> {
    dispatcher: Dispatcher,
    supervisor: Supervisor<L>,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    options: RuntimeOptions,
    draining: bool,
    stopping: bool,
}

impl<L: ProcessLauncher> fmt::Debug for Runtime<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("dispatcher", &self.dispatcher)
            .field("registered", &self.supervisor.registry().len())
            .field("options", &self.options)
            .field("draining", &self.draining)
            .field("stopping", &self.stopping)
            .finish_non_exhaustive()
    }
}

impl<L: ProcessLauncher> Runtime<L> {
    pub fn new(
        dispatcher: Dispatcher,
        supervisor: Supervisor<L>,
        event_rx: mpsc::Receiver<RuntimeEvent>,
        options: RuntimeOptions,
    ) -> Self {
        Self {
            dispatcher,
            supervisor,
            event_rx,
            options,
            draining: false,
            stopping: false,
        }
    }

    /// Main event loop.
    ///
    /// Returns `Ok` when draining finishes: after a shutdown request, or
    /// after the source closed with `exit_when_idle`, once every launched
    /// process has reported its exit.
    ///
    /// A fatal error (never raised in watch mode) also starts draining.
    /// After a shutdown request or a fatal error every registered process is
    /// signalled and further hook firings are ignored; a fatal error is
    /// returned once the supervisor is idle.
    pub async fn run(mut self) -> Result<Supervisor<L>> {
        info!("hookshell runtime started");
        let mut fatal: Option<HookshellError> = None;

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            if self.stopping && matches!(event, RuntimeEvent::HookFired { .. }) {
                debug!("ignoring hook fired while stopping");
                continue;
            }

            if let Err(err) = self.handle_event(event) {
                if fatal.is_none() {
                    error!("{err}; stopping running scripts");
                    self.stop();
                    fatal = Some(err);
                } else {
                    error!("{err}");
                }
            }

            if self.draining && self.supervisor.is_idle() {
                info!("no scripts running; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        match fatal {
            Some(err) => Err(err),
            None => Ok(self.supervisor),
        }
    }

    /// Signal everything and stop accepting hook firings.
    fn stop(&mut self) {
        self.supervisor.terminate_all();
        self.stopping = true;
        self.draining = true;
    }

    fn handle_event(&mut self, event: RuntimeEvent) -> Result<()> {
        match event {
            RuntimeEvent::HookFired { hook, params } => {
                self.dispatcher.fire(&hook, &params, &mut self.supervisor)?;
            }
            RuntimeEvent::ProcessExited { id, key, report } => {
                self.supervisor.on_exit(id, &key, report)?;
            }
            RuntimeEvent::ProcessErrored { id, key, error } => {
                self.supervisor.on_error(id, &key, error)?;
            }
            RuntimeEvent::SourceClosed => {
                if self.options.exit_when_idle {
                    debug!("event source closed; exiting once idle");
                    self.draining = true;
                } else {
                    info!("event source closed; waiting for shutdown");
                }
            }
            RuntimeEvent::ShutdownRequested => {
                info!("shutdown requested");
                self.stop();
            }
        }
        Ok(())
    }
}
