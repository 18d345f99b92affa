//! Preference persistence
//!
//! Stores UI preferences in `<config_dir>/preferences.json`.

use anyhow::{Context, Result};
use develevate_types::Preferences;
use std::path::{Path, PathBuf};

pub const PREFERENCES_FILE: &str = "preferences.json";

pub fn preferences_path(config_dir: &Path) -> PathBuf {
    config_dir.join(PREFERENCES_FILE)
}

/// Load preferences from `<config_dir>/preferences.json`.
/// Returns defaults on any I/O or parse error (graceful degradation).
pub fn load(config_dir: &Path) -> Preferences {
    let path = preferences_path(config_dir);
    match std::fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed preferences");
            Preferences::default()
        }),
        Err(_) => Preferences::default(),
    }
}

/// Persist preferences to `<config_dir>/preferences.json`.
pub fn save(config_dir: &Path, prefs: &Preferences) -> Result<()> {
    std::fs::create_dir_all(config_dir)
        .context("Failed to create config directory for preferences")?;
    let path = preferences_path(config_dir);
    let content =
        serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write preferences to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        assert_eq!(load(dir.path()), Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("develevate");
        save(&nested, &Preferences { dark_mode: true }).unwrap();

        let raw = std::fs::read_to_string(preferences_path(&nested)).unwrap();
        assert!(raw.contains("\"darkMode\": true"));
        assert!(load(&nested).dark_mode);
    }

    #[test]
    fn test_garbage_file_is_default() {
        let dir = tempdir().unwrap();
        std::fs::write(preferences_path(dir.path()), "{not json").unwrap();
        assert_eq!(load(dir.path()), Preferences::default());
    }
}
