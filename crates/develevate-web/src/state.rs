//! Global client state: preferences and the authenticated session
//!
//! Both live in Leptos context so any page can reach them. Components read
//! through the signals and never keep private copies.

use crate::storage::{self, PREFERENCES_KEY, SESSION_KEY};
use develevate_types::menu::{AuthService, PreferenceDispatch};
use develevate_types::{AuthResponse, PreferenceAction, Preferences, UserRecord};
use leptos::prelude::*;

/// Preference store (dark mode) shared by every page
#[derive(Clone, Copy)]
pub struct GlobalState {
    state: RwSignal<Preferences>,
}

impl GlobalState {
    /// Start from the persisted preferences, or defaults
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(storage::load(PREFERENCES_KEY).unwrap_or_default()),
        }
    }

    /// Current preferences (tracked)
    pub fn prefs(&self) -> Preferences {
        self.state.get()
    }

    pub fn dark_mode(&self) -> bool {
        self.state.with(|p| p.dark_mode)
    }

    /// The only mutation path: run the reducer, then persist
    pub fn dispatch(&self, action: PreferenceAction) {
        self.state.update(|prefs| *prefs = prefs.reduce(action));
        storage::save(PREFERENCES_KEY, &self.state.get_untracked());
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceDispatch for GlobalState {
    fn current_prefs(&self) -> Preferences {
        self.state.get_untracked()
    }

    fn dispatch(&self, action: PreferenceAction) {
        GlobalState::dispatch(self, action);
    }
}

/// Logged-in session (user + token), persisted across reloads
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<AuthResponse>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(storage::load(SESSION_KEY)),
        }
    }

    /// Current user (tracked)
    pub fn user(&self) -> Option<UserRecord> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    /// Store a successful signup/login response
    pub fn login(&self, response: AuthResponse) {
        storage::save(SESSION_KEY, &response);
        self.session.set(Some(response));
    }

    /// Forget the session locally. Never fails; storage errors are ignored.
    pub fn logout(&self) {
        storage::remove(SESSION_KEY);
        self.session.set(None);
        leptos::logging::log!("Signed out");
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService for AuthContext {
    fn current_user(&self) -> Option<UserRecord> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.user.clone()))
    }

    fn logout(&self) {
        AuthContext::logout(self);
    }
}

/// Provides [`GlobalState`] and [`AuthContext`] to the subtree
#[component]
pub fn AppStateProvider(children: Children) -> impl IntoView {
    provide_context(GlobalState::new());
    provide_context(AuthContext::new());

    children()
}

pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
