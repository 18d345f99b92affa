//! Preference change notifications over `tokio::sync::broadcast`

use develevate_types::Preferences;
use tokio::sync::broadcast;

/// Events emitted by the preference store
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceEvent {
    /// A dispatched action produced a new state
    Changed {
        previous: Preferences,
        current: Preferences,
    },
    /// The new state could not be written to disk (in-memory state is kept)
    PersistFailed(String),
}

/// Bounded backlog per subscriber; preference changes are rare
pub const DEFAULT_CAPACITY: usize = 16;

/// Fan-out of [`PreferenceEvent`]s to any number of receivers
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PreferenceEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        Self {
            sender: broadcast::channel(capacity).0,
        }
    }

    /// Send to current subscribers; with none, the event is dropped
    pub fn publish(&self, event: PreferenceEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("Preference event dropped: no subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PreferenceEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
