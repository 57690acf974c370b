//! Page footer.

use leptos::prelude::*;

use crate::motion::RevealFrom;
use crate::motion::reveal::reveal_class;

/// Closing line under the last section.
#[component]
pub fn Footer(text: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class=reveal_class(RevealFrom::Fade, "footer-text") data-reveal="footer">
                    {text}
                </p>
            </div>
        </footer>
    }
}
