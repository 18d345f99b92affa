//! Data models shared between the browser client and the API server

pub mod account;
pub mod user;

pub use account::{AuthResponse, LoginRequest, SignupRequest};
pub use user::{Progress, UserRecord};
