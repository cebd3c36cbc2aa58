// src/hooks/source.rs

use tokio::sync::mpsc;

use crate::command::EventParams;
use crate::engine::RuntimeEvent;
use crate::errors::Result;

/// Anything that can fire named hooks.
pub trait EventSource {
    /// Whether `name` is a hook this source can fire.
    fn has_event(&self, name: &str) -> bool;

    /// Register `subscriber` to be notified every time `name` fires.
    fn subscribe(&mut self, name: &str, subscriber: HookSubscriber) -> Result<()>;
}

/// Callback registered with an event source for one hook.
///
/// Notifying it queues a `HookFired` event on the runtime channel, so the
/// actual work happens on the runtime loop, never on the source's side.
#[derive(Debug, Clone)]
pub struct HookSubscriber {
    hook: String,
    events: mpsc::Sender<RuntimeEvent>,
}

impl HookSubscriber {
    pub fn new(hook: impl Into<String>, events: mpsc::Sender<RuntimeEvent>) -> Self {
        Self {
            hook: hook.into(),
            events,
        }
    }

    pub async fn notify(&self, params: EventParams) -> Result<()> {
        self.events
            .send(RuntimeEvent::HookFired {
                hook: self.hook.clone(),
                params,
            })
            .await?;
        Ok(())
    }
}
