//! Section heading shared by the content sections.

use leptos::prelude::*;

use crate::motion::RevealFrom;
use crate::motion::reveal::reveal_class;

/// Gradient section title that rises into view once.
#[component]
pub fn SectionHeading(reveal_key: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 class=reveal_class(RevealFrom::Below, "section-title gradient-text") data-reveal=reveal_key>
            {title}
        </h2>
    }
}
