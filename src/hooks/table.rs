// src/hooks/table.rs

use std::collections::BTreeMap;

use tracing::trace;

use crate::command::EventParams;
use crate::errors::{HookshellError, Result};

use super::source::{EventSource, HookSubscriber};

/// In-memory event source with a fixed set of hook names.
#[derive(Debug, Default)]
pub struct HookTable {
    hooks: BTreeMap<String, Vec<HookSubscriber>>,
}

impl HookTable {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hooks = names
            .into_iter()
            .map(|name| (name.into(), Vec::new()))
            .collect();
        Self { hooks }
    }

    pub fn subscriber_count(&self, name: &str) -> usize {
        self.hooks.get(name).map_or(0, Vec::len)
    }

    /// Fire `name`, notifying its subscribers in subscription order.
    ///
    /// Returns how many subscribers were notified.
    pub async fn fire(&self, name: &str, params: EventParams) -> Result<usize> {
        let subscribers = self
            .hooks
            .get(name)
            .ok_or_else(|| HookshellError::UnknownHook(name.to_string()))?;

        trace!(hook = name, ?params, subscribers = subscribers.len(), "firing hook");
        for subscriber in subscribers {
            subscriber.notify(params.clone()).await?;
        }
        Ok(subscribers.len())
    }
}

impl EventSource for HookTable {
    fn has_event(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    fn subscribe(&mut self, name: &str, subscriber: HookSubscriber) -> Result<()> {
        let subscribers = self
            .hooks
            .get_mut(name)
            .ok_or_else(|| HookshellError::UnknownHook(name.to_string()))?;
        subscribers.push(subscriber);
        Ok(())
    }
}
