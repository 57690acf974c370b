//! # portfolio-leptos
//!
//! Components, content and motion math for a single-page portfolio: a hero
//! banner, a rotating skill globe, a project gallery and a contact section.
//!
//! The same component tree serves two targets:
//!
//! - **Static HTML** - [`render_portfolio`] renders the whole document with
//!   Leptos SSR (the `ssr` feature, on by default), and the
//!   `portfolio-render` binary writes it to disk.
//! - **Browser** - the `site` crate mounts [`components::PortfolioPage`] with
//!   the `csr` feature and wires pointer, scroll and intersection events into
//!   the [`motion`] value cells.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_leptos::{content, render_portfolio};
//!
//! let html = render_portfolio(&content::published());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Minhas Skills"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - data model (projects, skills, contact)
//! - [`content`] - published tables, JSON loading and validation
//! - [`motion`] - ring layout, scroll fraction, spring follower, loops
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constant
//!
//! ---
//!
//! Developed with 💜 by ACADL (c)2024

#![warn(missing_docs)]

pub mod components;
pub mod content;
pub mod error;
pub mod motion;
pub mod styles;
pub mod types;

pub use error::ContentError;

#[cfg(feature = "ssr")]
use components::PortfolioDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use types::PortfolioContent;

/// Render the complete page, including `<!DOCTYPE html>`.
///
/// Content is rendered as given; call [`content::validate`] first when it
/// comes from an untrusted file.
#[cfg(feature = "ssr")]
pub fn render_portfolio(content: &PortfolioContent) -> String {
    tracing::debug!(
        projects = content.projects.len(),
        skills = content.skills.len(),
        "rendering portfolio"
    );

    let doc = view! { <PortfolioDocument content=content.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_published_page() {
        let html = render_portfolio(&content::published());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("ACADL | Portfolio"));
        assert!(html.contains("Web Developer &amp; Digital Innovator"));
        assert!(html.contains("FOTO"));
    }

    #[test]
    fn renders_portrait_when_set() {
        let mut content = content::published();
        content.profile.portrait = Some("/me.jpg".into());
        let html = render_portfolio(&content);

        assert!(html.contains(r#"src="/me.jpg""#));
        assert!(!html.contains("FOTO"));
    }

    #[test]
    fn sections_appear_in_order() {
        let html = render_portfolio(&content::published());
        let pos = |id: &str| {
            html.find(&format!(r#"id="{id}""#))
                .unwrap_or_else(|| panic!("missing section {id}"))
        };

        assert!(pos("hero") < pos("skills"));
        assert!(pos("skills") < pos("projects"));
        assert!(pos("projects") < pos("contact"));
        assert!(pos("contact") < html.find("<footer").unwrap());
    }

    #[test]
    fn contact_email_is_plain_text() {
        let html = render_portfolio(&content::published());
        assert!(html.contains("acadl@email.com"));
        assert!(!html.contains("mailto:"));
    }
}
