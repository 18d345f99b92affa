//! Open/closed state machine for the profile menu
//!
//! [`SessionMenu::handle`] is pure: it returns the side effects to run, in
//! order, and the host applies them. This keeps the listener bookkeeping and
//! the logout ordering testable without a browser.

use super::catalog::{catalog, Icon, MenuAction, MenuSection};
use super::identity::IdentitySummary;
use crate::models::UserRecord;
use crate::preferences::{PreferenceAction, Preferences};
use crate::route::Route;

pub const FOOTER_TEXT: &str = "DevElevate v1.0 • Made with ❤️";

/// Visibility of the menu. Open iff the outside-click listener is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Where a document-level pointer press landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    InsideMenu,
    Outside,
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Parent changed the `is_open` prop
    Visibility(bool),
    /// Document-level pointer press
    PointerDown(PointerTarget),
    /// A catalog item was clicked
    Select(MenuAction),
    /// Theme button clicked
    ToggleTheme,
    /// Sign-out button clicked
    SignOut,
    /// Component is being destroyed
    Unmount,
}

/// Side effects requested by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Register the document pointer-press listener
    ListenOutside,
    /// Remove the document pointer-press listener
    StopListening,
    Navigate(Route),
    Logout,
    Dispatch(PreferenceAction),
    /// Ask the parent to close the menu
    Close,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMenu {
    state: MenuState,
}

impl SessionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Advance the machine and return the effects to apply, in order
    pub fn handle(&mut self, event: MenuEvent) -> Vec<MenuEffect> {
        match (self.state, event) {
            (MenuState::Closed, MenuEvent::Visibility(true)) => {
                self.state = MenuState::Open;
                vec![MenuEffect::ListenOutside]
            }
            (MenuState::Open, MenuEvent::Visibility(false) | MenuEvent::Unmount) => {
                self.state = MenuState::Closed;
                vec![MenuEffect::StopListening]
            }
            // Closed: no DOM, no listener, nothing can be clicked
            (MenuState::Closed, _) => Vec::new(),
            (MenuState::Open, MenuEvent::Visibility(true)) => Vec::new(),
            (MenuState::Open, MenuEvent::PointerDown(PointerTarget::Outside)) => {
                vec![MenuEffect::Close]
            }
            (MenuState::Open, MenuEvent::PointerDown(PointerTarget::InsideMenu)) => Vec::new(),
            (MenuState::Open, MenuEvent::Select(action)) => {
                let mut effects = action_effects(action);
                effects.push(MenuEffect::Close);
                effects
            }
            (MenuState::Open, MenuEvent::SignOut) => {
                let mut effects = action_effects(MenuAction::Logout);
                effects.push(MenuEffect::Close);
                effects
            }
            (MenuState::Open, MenuEvent::ToggleTheme) => {
                vec![MenuEffect::Dispatch(PreferenceAction::ToggleDarkMode)]
            }
        }
    }

    /// Render model, or `None` while closed
    pub fn view(&self, user: Option<&UserRecord>, prefs: Preferences) -> Option<MenuView> {
        self.is_open().then(|| MenuView::build(user, prefs))
    }
}

fn action_effects(action: MenuAction) -> Vec<MenuEffect> {
    match action {
        MenuAction::Navigate(route) => vec![MenuEffect::Navigate(route)],
        MenuAction::Logout => vec![MenuEffect::Logout, MenuEffect::Navigate(Route::Login)],
    }
}

/// Everything the open menu displays, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub identity: IdentitySummary,
    pub sections: Vec<MenuSection>,
    pub theme: ThemeToggle,
    pub dark_mode: bool,
    pub footer: &'static str,
}

/// Theme button face: offers the theme that is *not* active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    pub icon: Icon,
    pub label: &'static str,
}

impl ThemeToggle {
    pub fn for_prefs(prefs: Preferences) -> Self {
        if prefs.dark_mode {
            Self {
                icon: Icon::Sun,
                label: "Light",
            }
        } else {
            Self {
                icon: Icon::Moon,
                label: "Dark",
            }
        }
    }
}

impl MenuView {
    pub fn build(user: Option<&UserRecord>, prefs: Preferences) -> Self {
        Self {
            identity: IdentitySummary::from_user(user),
            sections: catalog(),
            theme: ThemeToggle::for_prefs(prefs),
            dark_mode: prefs.dark_mode,
            footer: FOOTER_TEXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_menu() -> SessionMenu {
        let mut menu = SessionMenu::new();
        menu.handle(MenuEvent::Visibility(true));
        menu
    }

    #[test]
    fn test_closed_ignores_everything_but_open() {
        let mut menu = SessionMenu::new();
        for event in [
            MenuEvent::Visibility(false),
            MenuEvent::PointerDown(PointerTarget::Outside),
            MenuEvent::Select(MenuAction::Navigate(Route::Profile)),
            MenuEvent::ToggleTheme,
            MenuEvent::SignOut,
            MenuEvent::Unmount,
        ] {
            assert!(menu.handle(event).is_empty(), "{:?}", event);
            assert_eq!(menu.state(), MenuState::Closed);
        }
    }

    #[test]
    fn test_open_registers_listener_once() {
        let mut menu = SessionMenu::new();
        assert_eq!(
            menu.handle(MenuEvent::Visibility(true)),
            vec![MenuEffect::ListenOutside]
        );
        // Re-render with the same prop must not add a second listener
        assert!(menu.handle(MenuEvent::Visibility(true)).is_empty());
        assert!(menu.is_open());
    }

    #[test]
    fn test_close_and_unmount_release_listener() {
        let mut menu = open_menu();
        assert_eq!(
            menu.handle(MenuEvent::Visibility(false)),
            vec![MenuEffect::StopListening]
        );

        let mut menu = open_menu();
        assert_eq!(
            menu.handle(MenuEvent::Unmount),
            vec![MenuEffect::StopListening]
        );
        assert!(menu.handle(MenuEvent::Unmount).is_empty());
    }

    #[test]
    fn test_pointer_inside_vs_outside() {
        let mut menu = open_menu();
        assert!(menu
            .handle(MenuEvent::PointerDown(PointerTarget::InsideMenu))
            .is_empty());
        assert_eq!(
            menu.handle(MenuEvent::PointerDown(PointerTarget::Outside)),
            vec![MenuEffect::Close]
        );
    }

    #[test]
    fn test_select_navigates_then_closes() {
        let mut menu = open_menu();
        assert_eq!(
            menu.handle(MenuEvent::Select(MenuAction::Navigate(Route::Settings))),
            vec![MenuEffect::Navigate(Route::Settings), MenuEffect::Close]
        );
    }

    #[test]
    fn test_sign_out_order() {
        let mut menu = open_menu();
        assert_eq!(
            menu.handle(MenuEvent::SignOut),
            vec![
                MenuEffect::Logout,
                MenuEffect::Navigate(Route::Login),
                MenuEffect::Close
            ]
        );
    }

    #[test]
    fn test_logout_item_closes_once() {
        let mut menu = open_menu();
        let effects = menu.handle(MenuEvent::Select(MenuAction::Logout));
        let closes = effects.iter().filter(|e| **e == MenuEffect::Close).count();
        assert_eq!(closes, 1);
    }

    #[test]
    fn test_toggle_theme_keeps_menu_open() {
        let mut menu = open_menu();
        assert_eq!(
            menu.handle(MenuEvent::ToggleTheme),
            vec![MenuEffect::Dispatch(PreferenceAction::ToggleDarkMode)]
        );
        assert!(menu.is_open());
    }

    #[test]
    fn test_view_only_when_open() {
        let menu = SessionMenu::new();
        assert!(menu.view(None, Preferences::default()).is_none());

        let view = open_menu().view(None, Preferences::default()).unwrap();
        assert_eq!(view.identity.name, "Guest User");
        assert_eq!(view.sections.len(), 3);
        assert_eq!(view.footer, FOOTER_TEXT);
    }

    #[test]
    fn test_theme_toggle_face() {
        let light = ThemeToggle::for_prefs(Preferences { dark_mode: false });
        assert_eq!((light.icon, light.label), (Icon::Moon, "Dark"));

        let dark = ThemeToggle::for_prefs(Preferences { dark_mode: true });
        assert_eq!((dark.icon, dark.label), (Icon::Sun, "Light"));
    }
}
