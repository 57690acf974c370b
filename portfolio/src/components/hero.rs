//! Hero banner: name, tagline, call-to-action buttons and the portrait.
//!
//! Entrance animations run once on load through `enter-*` classes, so the
//! hero is the one block that never waits for a reveal.

use leptos::prelude::*;

use crate::motion::reveal::enter_delay;
use crate::types::Profile;

/// Full-height opening section with the profile copy.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let Profile {
        name,
        tagline,
        summary,
        portrait,
    } = profile;

    view! {
        <section id="hero" class="hero">
            <div class="container hero-grid">
                <div class="hero-content enter-left">
                    <h1 class="hero-title gradient-text">{name.clone()}</h1>
                    <p class="hero-tagline enter-fade" style=enter_delay(0.3)>{tagline}</p>
                    <p class="hero-summary enter-fade" style=enter_delay(0.6)>{summary}</p>
                    <div class="hero-actions enter-up" style=enter_delay(0.9)>
                        <a href="#projects" class="btn btn-primary">"Ver Projetos"</a>
                        <a href="#contact" class="btn btn-outline">"Fale Comigo"</a>
                    </div>
                </div>
                <Portrait name=name portrait=portrait />
            </div>
        </section>
    }
}

#[component]
fn Portrait(name: String, portrait: Option<String>) -> impl IntoView {
    let frame = match portrait {
        Some(src) => view! { <img class="portrait-img" src=src alt=name /> }.into_any(),
        None => view! { <div class="portrait-tile">"FOTO"</div> }.into_any(),
    };

    view! {
        <div class="hero-portrait enter-scale" style=enter_delay(0.4)>
            <div class="portrait-halo"></div>
            <div class="portrait-frame">{frame}</div>
        </div>
    }
}
