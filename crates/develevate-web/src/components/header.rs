//! Header component

use crate::components::{IconView, ProfileDropdown};
use crate::state::use_auth;
use develevate_types::menu::{Icon, IdentitySummary};
use develevate_types::Route;
use leptos::prelude::*;
use leptos_router::components::A;

/// Header with logo, auth links and the avatar button owning the profile menu
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let (menu_open, set_menu_open) = signal(false);

    let avatar = move || IdentitySummary::from_user(auth.user().as_ref());

    view! {
        <header class="header">
            <A href=Route::Home.path() attr:class="logo">
                <span class="logo-mark">
                    <IconView icon=Icon::Code2 size=18 />
                </span>
                <span class="logo-text">"DevElevate"</span>
            </A>

            <nav class="header-nav">
                <A href=Route::CodingProblems.path() attr:class="header-link">"Problems"</A>
                <A href=Route::Premium.path() attr:class="header-link">"Premium"</A>
            </nav>

            <div class="header-actions">
                <Show when=move || !auth.is_authenticated()>
                    <A href=Route::Login.path() attr:class="btn btn-ghost">"Log in"</A>
                    <A href=Route::Signup.path() attr:class="btn btn-primary">"Sign up"</A>
                </Show>

                <div class="header-profile">
                    <button
                        class="avatar-button"
                        aria-label="Open profile menu"
                        aria-expanded=move || menu_open.get().to_string()
                        // Keep the press away from the menu's outside-click listener
                        on:mousedown=|ev| ev.stop_propagation()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <img
                            class="avatar-button-img"
                            src=move || avatar().avatar_url
                            alt=move || avatar().avatar_alt
                        />
                    </button>
                    <ProfileDropdown
                        is_open=menu_open
                        on_close=move || set_menu_open.set(false)
                    />
                </div>
            </div>
        </header>
    }
}
