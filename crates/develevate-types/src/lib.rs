//! develevate-types - Shared data types for DevElevate
//!
//! This crate contains pure data structures and the session menu state
//! machine, without heavy dependencies. No tokio, no async runtime.
//!
//! Used by:
//! - develevate-core (backend logic)
//! - develevate-web (frontend WASM and API router)

pub mod home;
pub mod menu;
pub mod models;
pub mod preferences;
pub mod route;

// Re-export model types
pub use models::{AuthResponse, LoginRequest, Progress, SignupRequest, UserRecord};

pub use menu::{
    IdentitySummary, MenuAction, MenuEffect, MenuEvent, MenuHost, MenuItem, MenuSection,
    MenuState, PointerTarget, SessionMenu, SessionMenuController,
};
pub use preferences::{PreferenceAction, Preferences};
pub use route::Route;
