//! Process-wide preference store
//!
//! Single writer: [`PreferenceStore::dispatch`] is the only path that mutates
//! the state, and it always goes through the shared reducer. Readers take a
//! `parking_lot::RwLock` read guard.

use crate::event::{EventBus, PreferenceEvent};
use crate::preferences;
use develevate_types::menu::PreferenceDispatch;
use develevate_types::{PreferenceAction, Preferences};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use tokio::sync::broadcast;
use tracing::{debug, warn};

pub struct PreferenceStore {
    prefs: RwLock<Preferences>,

    /// Event bus for notifying subscribers
    event_bus: EventBus,

    /// Directory to persist into after each change (None = memory only)
    persist_dir: Option<PathBuf>,
}

impl PreferenceStore {
    /// In-memory store starting from `initial`
    pub fn new(initial: Preferences) -> Self {
        Self {
            prefs: RwLock::new(initial),
            event_bus: EventBus::default(),
            persist_dir: None,
        }
    }

    /// Store backed by `<config_dir>/preferences.json`
    pub fn load(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let initial = preferences::load(&config_dir);
        debug!(dir = %config_dir.display(), dark_mode = initial.dark_mode, "Loaded preferences");

        Self {
            prefs: RwLock::new(initial),
            event_bus: EventBus::default(),
            persist_dir: Some(config_dir),
        }
    }

    pub fn current(&self) -> Preferences {
        *self.prefs.read()
    }

    /// Reduce `action` into the state, notify subscribers, persist if backed
    pub fn dispatch(&self, action: PreferenceAction) -> Preferences {
        let (previous, current) = {
            let mut guard = self.prefs.write();
            let previous = *guard;
            *guard = previous.reduce(action);
            (previous, *guard)
        };

        debug!(?action, dark_mode = current.dark_mode, "Preference dispatched");
        self.event_bus
            .publish(PreferenceEvent::Changed { previous, current });

        if let Some(dir) = &self.persist_dir {
            if let Err(e) = preferences::save(dir, &current) {
                warn!(error = %e, "Failed to persist preferences");
                self.event_bus
                    .publish(PreferenceEvent::PersistFailed(format!("{:#}", e)));
            }
        }

        current
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PreferenceEvent> {
        self.event_bus.subscribe()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn persist_dir(&self) -> Option<&Path> {
        self.persist_dir.as_deref()
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}

impl PreferenceDispatch for PreferenceStore {
    fn current_prefs(&self) -> Preferences {
        self.current()
    }

    fn dispatch(&self, action: PreferenceAction) {
        PreferenceStore::dispatch(self, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_dispatch_notifies_subscribers() {
        let store = PreferenceStore::default();
        let mut rx = store.subscribe();

        let next = store.dispatch(PreferenceAction::ToggleDarkMode);
        assert!(next.dark_mode);

        match rx.recv().await.unwrap() {
            PreferenceEvent::Changed { previous, current } => {
                assert!(!previous.dark_mode);
                assert!(current.dark_mode);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_backed_store_persists_and_reloads() {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::load(dir.path());
        assert!(!store.current().dark_mode);

        store.dispatch(PreferenceAction::ToggleDarkMode);

        let reloaded = PreferenceStore::load(dir.path());
        assert!(reloaded.current().dark_mode);
    }

    #[test]
    fn test_memory_store_writes_nothing() {
        let store = PreferenceStore::new(Preferences { dark_mode: true });
        assert!(store.persist_dir().is_none());
        assert!(!store.dispatch(PreferenceAction::ToggleDarkMode).dark_mode);
    }

    #[test]
    fn test_concurrent_toggles_are_not_lost() {
        let store = Arc::new(PreferenceStore::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.dispatch(PreferenceAction::ToggleDarkMode);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        // 200 toggles: back to the starting value
        assert!(!store.current().dark_mode);
    }

    #[test]
    fn test_store_as_dispatch_trait_object() {
        let store = PreferenceStore::default();
        let dispatch: &dyn PreferenceDispatch = &store;
        dispatch.dispatch(PreferenceAction::ToggleDarkMode);
        assert!(dispatch.current_prefs().dark_mode);
    }
}
