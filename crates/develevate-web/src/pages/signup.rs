//! Signup page

use crate::api;
use crate::state::use_auth;
use develevate_types::{Route, SignupRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Matches the server-side minimum
const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn Signup() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = SignupRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            set_error.set(Some(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
            return;
        }
        let navigate = navigate.clone();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::signup(&request).await {
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
                <h2>"Create your account"</h2>
                {move || error.get().map(|e| view! { <div class="auth-error">{e}</div> })}
                <label class="auth-field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |e| set_name.set(event_target_value(&e))
                    />
                </label>
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
                    {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                </button>
                <p class="auth-switch">
                    "Already registered? "
                    <A href=Route::Login.path()>"Log in"</A>
                </p>
            </form>
        </div>
    }
}
