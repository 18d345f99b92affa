//! Login page

use crate::api;
use crate::state::use_auth;
use develevate_types::{LoginRequest, Route};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    auth.login(response);
                    navigate(Route::Home.path(), Default::default());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Welcome back"</h2>
                {move || error.get().map(|e| view! { <div class="auth-error">{e}</div> })}
                <label class="auth-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |e| set_email.set(event_target_value(&e))
                    />
                </label>
                <label class="auth-field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |e| set_password.set(event_target_value(&e))
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Log in" }}
                </button>
                <p class="auth-switch">
                    "No account yet? "
                    <A href=Route::Signup.path()>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
