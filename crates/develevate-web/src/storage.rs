//! Browser `localStorage` helpers (JSON values)
//!
//! Off wasm every function is a no-op, so server builds never touch JS.

pub const PREFERENCES_KEY: &str = "develevate-preferences";
pub const SESSION_KEY: &str = "develevate-session";

pub use imp::{load, remove, save};

#[cfg(target_arch = "wasm32")]
mod imp {
    use serde::{de::DeserializeOwned, Serialize};

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Read and decode a value; `None` when absent or malformed
    pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw)
            .map_err(|e| leptos::logging::warn!("Ignoring malformed {}: {}", key, e))
            .ok()
    }

    pub fn save<T: Serialize>(key: &str, value: &T) {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(e) = storage.set_item(key, &raw) {
                    leptos::logging::warn!("Failed to store {}: {:?}", key, e);
                }
            }
            Err(e) => leptos::logging::warn!("Failed to encode {}: {}", key, e),
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                leptos::logging::warn!("Failed to remove {}: {:?}", key, e);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use serde::{de::DeserializeOwned, Serialize};

    pub fn load<T: DeserializeOwned>(_key: &str) -> Option<T> {
        None
    }

    pub fn save<T: Serialize>(_key: &str, _value: &T) {}

    pub fn remove(_key: &str) {}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_helpers_are_inert() {
        save(SESSION_KEY, &"token");
        assert_eq!(load::<String>(SESSION_KEY), None);
        remove(SESSION_KEY);
        remove(SESSION_KEY);
        assert_eq!(load::<String>(PREFERENCES_KEY), None);
    }
}
