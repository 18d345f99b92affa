//! Page components

mod home;
mod login;
mod placeholders;
mod signup;

pub use home::Home;
pub use login::Login;
pub use placeholders::{CodingProblems, HelpCenter, Premium, Profile, Settings};
pub use signup::Signup;
