//! Leptos UI components

mod empty_state;
mod header;
mod icon;
mod profile_dropdown;

pub use empty_state::EmptyState;
pub use header::Header;
pub use icon::IconView;
pub use profile_dropdown::ProfileDropdown;
