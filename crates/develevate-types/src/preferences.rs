//! Cross-page user preferences and their reducer
//!
//! Preferences are never written field-by-field: callers dispatch a
//! [`PreferenceAction`] and the reducer computes the next state.

use serde::{Deserialize, Serialize};

/// Global UI preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Dark theme enabled
    #[serde(default)]
    pub dark_mode: bool,
}

/// The only ways preferences can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceAction {
    ToggleDarkMode,
}

impl Preferences {
    /// Apply an action and return the resulting state
    #[must_use]
    pub fn reduce(self, action: PreferenceAction) -> Self {
        match action {
            PreferenceAction::ToggleDarkMode => Self {
                dark_mode: !self.dark_mode,
            },
        }
    }

    /// CSS class for the app root
    pub fn theme_class(&self) -> &'static str {
        if self.dark_mode {
            "dark"
        } else {
            "light"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_both_ways() {
        let light = Preferences::default();
        let dark = light.reduce(PreferenceAction::ToggleDarkMode);
        assert!(dark.dark_mode);
        assert!(!dark.reduce(PreferenceAction::ToggleDarkMode).dark_mode);
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_string(&PreferenceAction::ToggleDarkMode).unwrap();
        assert_eq!(json, r#"{"type":"TOGGLE_DARK_MODE"}"#);
    }

    #[test]
    fn test_missing_field_defaults_to_light() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.theme_class(), "light");
    }
}
