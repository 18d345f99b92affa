//! Placeholder for pages that exist in the navigation but not yet in the app

use leptos::prelude::*;
use leptos_router::components::A;

/// Empty state shown by routes reachable from the profile menu
#[component]
pub fn EmptyState(
    /// Page title (e.g., "Settings", "Help Center")
    title: &'static str,
    /// What this page will offer
    description: &'static str,
    /// Optional hint pointing somewhere useful meanwhile
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    // lucide-hammer
                    <path d="m15 12-8.373 8.373a1 1 0 1 1-3-3L12 9"/>
                    <path d="m18 15 4-4"/>
                    <path d="m21.5 11.5-1.914-1.914A2 2 0 0 1 19 8.172V7l-2.26-2.26a6 6 0 0 0-4.202-1.756L9 2.96l.92.82A6.18 6.18 0 0 1 12 8.4V10l2 2h1.172a2 2 0 0 1 1.414.586L18.5 14.5"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>

            {hint.map(|h| {
                view! {
                    <div class="empty-state-hint">
                        <strong>"Meanwhile:"</strong>
                        " "
                        {h}
                    </div>
                }
            })}

            <div class="empty-state-actions">
                <A href="/" attr:class="btn btn-primary">"Back to Home"</A>
            </div>
        </div>
    }
}
