//! Browser entry for the portfolio.
//!
//! Mounts [`PortfolioPage`] and feeds it live motion: the spring-smoothed
//! pointer, the document scroll fraction and the reveal observer.

pub mod browser;
pub mod console;
pub mod reveal;

use leptos::prelude::*;
use portfolio_leptos::components::PortfolioPage;
use portfolio_leptos::motion::SpringConfig;
use portfolio_leptos::styles::PORTFOLIO_CSS;
use portfolio_leptos::types::PortfolioContent;

use browser::{use_pointer_tracker, use_scroll_progress, use_spring_follower};
use reveal::{mark_scripted, use_reveal_on_scroll};

/// Install the panic hook, greet the console and mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    console::print_banner();
    mark_scripted();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
pub fn App() -> impl IntoView {
    let tracker = use_pointer_tracker();
    let drawn = use_spring_follower(tracker, SpringConfig::CURSOR);
    let progress = use_scroll_progress();
    use_reveal_on_scroll();

    let scroll = Signal::derive(move || progress.fraction());

    view! {
        <style>{PORTFOLIO_CSS}</style>
        <PortfolioPage content=PortfolioContent::default() cursor=drawn scroll=scroll />
    }
}
