//! Routes the profile menu links to that only show an empty state for now

use crate::components::EmptyState;
use leptos::prelude::*;

#[component]
pub fn Profile() -> impl IntoView {
    view! {
        <EmptyState
            title="Profile"
            description="Your solved problems, streaks and badges will live here."
        />
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <EmptyState
            title="Settings"
            description="Account and editor settings are on their way."
            hint="Switch the theme from the profile menu"
        />
    }
}

#[component]
pub fn Premium() -> impl IntoView {
    view! {
        <EmptyState
            title="Upgrade to Pro"
            description="Unlimited AI hints, premium contests and detailed code reviews."
        />
    }
}

#[component]
pub fn HelpCenter() -> impl IntoView {
    view! {
        <EmptyState
            title="Help Center"
            description="Guides and answers to common questions about DevElevate."
        />
    }
}

#[component]
pub fn CodingProblems() -> impl IntoView {
    view! {
        <EmptyState
            title="Coding Problems"
            description="The problem set and online editor are being prepared."
        />
    }
}
