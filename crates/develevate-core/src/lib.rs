//! develevate-core - Core library for DevElevate
//!
//! Provides the process-wide preference store, preference persistence,
//! the account directory behind the signup/login routes, and server
//! configuration.

pub mod accounts;
pub mod config;
pub mod error;
pub mod event;
pub mod preferences;
pub mod store;

pub use accounts::{AccountError, AccountHandler, InMemoryAccounts};
pub use config::ServerConfig;
pub use error::CoreError;
pub use event::{EventBus, PreferenceEvent};
pub use store::PreferenceStore;
