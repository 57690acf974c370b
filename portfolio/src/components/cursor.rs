//! Cursor follower dot.

use leptos::prelude::*;

use crate::motion::follower_origin;
use crate::types::PointerPosition;

/// Gradient dot trailing the pointer.
///
/// `position` is the spring-smoothed pointer position; the dot is centred
/// on it.
#[component]
pub fn CursorFollower(#[prop(into)] position: Signal<PointerPosition>) -> impl IntoView {
    let style = move || {
        let origin = follower_origin(position.get());
        format!(
            "transform: translate3d({:.1}px, {:.1}px, 0);",
            origin.x, origin.y
        )
    };

    view! { <div class="cursor-follower" aria-hidden="true" style=style></div> }
}
