//! Background particle layer with scroll parallax.

use leptos::prelude::*;

use crate::motion::{Particle, parallax_offset};

/// Fixed layer of floating particles, pushed down as the page scrolls.
#[component]
pub fn ParticleField(
    /// Scroll fraction in `[0, 1]`
    #[prop(into)]
    scroll: Signal<f64>,
    particles: Vec<Particle>,
) -> impl IntoView {
    let layer_style = move || format!("transform: translateY({});", parallax_offset(scroll.get()));

    view! {
        <div class="particle-field" aria-hidden="true" style=layer_style>
            {particles
                .into_iter()
                .map(|p| view! { <span class="particle" style=p.style()></span> })
                .collect_view()}
        </div>
    }
}
