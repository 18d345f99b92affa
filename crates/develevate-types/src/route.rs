//! Client-side routes reachable from menus and pages

use std::fmt;

/// Navigable views of the client app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    Profile,
    Settings,
    Premium,
    HelpCenter,
    CodingProblems,
}

impl Route {
    /// Path used by the router
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Profile => "/profile",
            Route::Settings => "/settings",
            Route::Premium => "/premium",
            Route::HelpCenter => "/help-center",
            Route::CodingProblems => "/coding/problems",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
