//! Landing page

use crate::components::IconView;
use develevate_types::home::{editor_highlights, features};
use develevate_types::menu::Icon;
use develevate_types::Route;
use leptos::prelude::*;
use leptos_router::components::A;

/// Home page: hero, feature cards, editor pitch
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero-title">
                    "Master Coding"
                    <br />
                    <span class="hero-title-accent">"Shape the Future"</span>
                </h1>
                <p class="hero-subtitle">
                    "Practice problems, get AI-powered hints and compete with developers worldwide."
                </p>
                <A href=Route::CodingProblems.path() attr:class="btn btn-primary hero-cta">
                    "Start Coding Now"
                    <IconView icon=Icon::ArrowRight size=18 />
                </A>
            </section>

            <section class="features">
                {features()
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class=format!("feature-icon bg-gradient-to-r {}", feature.color)>
                                    <IconView icon=feature.icon size=24 />
                                </div>
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="editor-pitch">
                <h2>"Code with Confidence"</h2>
                <ul class="editor-highlights">
                    {editor_highlights()
                        .into_iter()
                        .map(|highlight| {
                            view! {
                                <li class="editor-highlight">
                                    <IconView icon=highlight.icon size=16 />
                                    <span>{highlight.text}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
