//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Header;
use crate::pages::{CodingProblems, HelpCenter, Home, Login, Premium, Profile, Settings, Signup};
use crate::state::{use_global_state, AppStateProvider};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppStateProvider>
            <Router>
                <Shell />
            </Router>
        </AppStateProvider>
    }
}

/// Layout inside the providers; the theme class follows the preference store
#[component]
fn Shell() -> impl IntoView {
    let prefs = use_global_state();

    view! {
        <div class=move || format!("app {}", prefs.prefs().theme_class())>
            <Header />
            <main class="content">
                <Routes fallback=|| "Not found">
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/login") view=Login />
                    <Route path=path!("/signup") view=Signup />
                    <Route path=path!("/profile") view=Profile />
                    <Route path=path!("/settings") view=Settings />
                    <Route path=path!("/premium") view=Premium />
                    <Route path=path!("/help-center") view=HelpCenter />
                    <Route path=path!("/coding/problems") view=CodingProblems />
                </Routes>
            </main>
        </div>
    }
}
