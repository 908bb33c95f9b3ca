//! Event log adapter
//!
//! Implements the EventPublisher port by appending to an in-memory log.

use crate::events::RegistryEvent;
use crate::ports::outbound::EventPublisher;

/// In-memory event log
pub struct InMemoryEventLog {
    events: parking_lot::RwLock<Vec<RegistryEvent>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self {
            events: parking_lot::RwLock::new(Vec::new()),
        }
    }

    pub fn get_events(&self) -> Vec<RegistryEvent> {
        self.events.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for InMemoryEventLog {
    fn publish(&self, event: RegistryEvent) {
        self.events.write().push(event);
    }
}
