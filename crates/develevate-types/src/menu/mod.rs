//! Profile (session) menu: catalog, identity header, state machine, host seams

pub mod catalog;
pub mod host;
pub mod identity;
pub mod machine;

pub use catalog::{catalog, Icon, MenuAction, MenuItem, MenuSection};
pub use host::{
    apply_effect, AuthService, MenuHost, Navigator, PreferenceDispatch, SessionMenuController,
};
pub use identity::{generated_avatar_url, IdentitySummary};
pub use machine::{
    MenuEffect, MenuEvent, MenuState, MenuView, PointerTarget, SessionMenu, ThemeToggle,
};
