//! Preference and configuration subcommands
//!
//! Both operate on the config directory directly and return the text to print.

use anyhow::{Context, Result};
use develevate_core::config::CONFIG_FILE;
use develevate_core::{PreferenceEvent, PreferenceStore, ServerConfig};
use develevate_types::PreferenceAction;
use std::path::Path;

/// Describe the stored theme, toggling it first when asked
pub fn run_theme(config_dir: &Path, toggle: bool) -> Result<String> {
    let store = PreferenceStore::load(config_dir);

    if !toggle {
        return Ok(format!("Theme: {}", store.current().theme_class()));
    }

    let mut events = store.subscribe();
    let prefs = store.dispatch(PreferenceAction::ToggleDarkMode);

    // The store reports persistence failures on its bus instead of returning them
    while let Ok(event) = events.try_recv() {
        if let PreferenceEvent::PersistFailed(reason) = event {
            anyhow::bail!("Failed to save preferences: {}", reason);
        }
    }

    Ok(format!("Theme switched to {}", prefs.theme_class()))
}

/// Write a default `develevate.toml`, refusing to clobber unless `force`
pub fn run_config_init(config_dir: &Path, force: bool) -> Result<String> {
    let path = config_dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    ServerConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(format!("Wrote {}", path.display()))
}
