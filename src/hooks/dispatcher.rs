// src/hooks/dispatcher.rs

use std::collections::BTreeMap;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::command::CommandSpec;
use crate::engine::RuntimeEvent;
use crate::errors::{ErrorPolicy, HookshellError, Result};
use crate::exec::ProcessLauncher;
use crate::supervisor::Supervisor;

use super::source::{EventSource, HookSubscriber};

/// Hook name → commands to run, in order, each time it fires.
pub type TriggerBindings = BTreeMap<String, Vec<CommandSpec>>;

/// Routes hook firings to the supervisor.
#[derive(Debug, Default)]
pub struct Dispatcher {
    bindings: TriggerBindings,
}

impl Dispatcher {
    /// Subscribe once to every bound hook on `source`.
    ///
    /// All names are checked before anything is subscribed. A hook the
    /// source does not know is reported through `policy`: fatal outside
    /// watch mode, otherwise logged and left unbound.
    pub fn bind(
        bindings: TriggerBindings,
        source: &mut dyn EventSource,
        events: &mpsc::Sender<RuntimeEvent>,
        policy: ErrorPolicy,
    ) -> Result<Self> {
        let mut known = TriggerBindings::new();
        for (hook, specs) in bindings {
            if source.has_event(&hook) {
                known.insert(hook, specs);
            } else {
                policy.report(HookshellError::UnknownHook(hook))?;
            }
        }

        for (hook, specs) in known.iter() {
            source.subscribe(hook, HookSubscriber::new(hook.clone(), events.clone()))?;
            debug!(hook = %hook, commands = specs.len(), "bound hook");
        }

        Ok(Self { bindings: known })
    }

    pub fn bindings(&self) -> &TriggerBindings {
        &self.bindings
    }

    pub fn is_bound(&self, hook: &str) -> bool {
        self.bindings.contains_key(hook)
    }

    /// Run every command bound to `hook`, in list order.
    pub fn fire<L: ProcessLauncher>(
        &self,
        hook: &str,
        params: &[String],
        supervisor: &mut Supervisor<L>,
    ) -> Result<()> {
        let Some(specs) = self.bindings.get(hook) else {
            warn!(hook, "fired hook has no bound commands");
            return Ok(());
        };

        debug!(hook, ?params, commands = specs.len(), "hook fired");
        for spec in specs {
            supervisor.handle(spec, params)?;
        }
        Ok(())
    }
}
