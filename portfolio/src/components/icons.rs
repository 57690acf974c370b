//! Inline SVG glyphs (Lucide, 24px grid, stroked).

use leptos::prelude::*;

use crate::types::{SkillIcon, SocialIcon};

/// Renders a stroked 24×24 glyph from its inner SVG markup.
///
/// ```rust,ignore
/// view! { <Glyph markup=ICON_MAIL class="contact-icon" /> }
/// ```
#[component]
pub fn Glyph(
    /// Child elements of the `<svg>`
    markup: &'static str,
    /// Rendered size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Stroke color; inherits `currentColor` when absent
    #[prop(optional, into)]
    color: Option<String>,
) -> impl IntoView {
    let style = color.map(|c| format!("color: {c};"));
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            style=style
            aria-hidden="true"
            inner_html=markup
        ></svg>
    }
}

/// Markup for a skill badge glyph.
pub fn skill_glyph(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => ICON_CODE,
        SkillIcon::Palette => ICON_PALETTE,
        SkillIcon::Server => ICON_SERVER,
        SkillIcon::Database => ICON_DATABASE,
    }
}

/// Markup for a social link glyph.
pub fn social_glyph(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::Github => ICON_GITHUB,
        SocialIcon::Linkedin => ICON_LINKEDIN,
        SocialIcon::Instagram => ICON_INSTAGRAM,
    }
}

// =============================================================================
// Lucide - https://lucide.dev/
// =============================================================================

/// Angle brackets
pub const ICON_CODE: &str =
    r#"<polyline points="16 18 22 12 16 6"></polyline><polyline points="8 6 2 12 8 18"></polyline>"#;

/// Paint palette
pub const ICON_PALETTE: &str = r#"<circle cx="13.5" cy="6.5" r=".5"></circle><circle cx="17.5" cy="10.5" r=".5"></circle><circle cx="8.5" cy="7.5" r=".5"></circle><circle cx="6.5" cy="12.5" r=".5"></circle><path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"></path>"#;

/// Server rack
pub const ICON_SERVER: &str = r#"<rect width="20" height="8" x="2" y="2" rx="2" ry="2"></rect><rect width="20" height="8" x="2" y="14" rx="2" ry="2"></rect><line x1="6" x2="6.01" y1="6" y2="6"></line><line x1="6" x2="6.01" y1="18" y2="18"></line>"#;

/// Database cylinder
pub const ICON_DATABASE: &str = r#"<ellipse cx="12" cy="5" rx="9" ry="3"></ellipse><path d="M3 5V19A9 3 0 0 0 21 19V5"></path><path d="M3 12A9 3 0 0 0 21 12"></path>"#;

/// GitHub mark
pub const ICON_GITHUB: &str = r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"></path><path d="M9 18c-4.51 2-5-2-7-2"></path>"#;

/// LinkedIn mark
pub const ICON_LINKEDIN: &str = r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path><rect width="4" height="12" x="2" y="9"></rect><circle cx="4" cy="4" r="2"></circle>"#;

/// Instagram mark
pub const ICON_INSTAGRAM: &str = r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"></rect><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"></line>"#;

/// Envelope
pub const ICON_MAIL: &str = r#"<rect width="20" height="16" x="2" y="4" rx="2"></rect><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>"#;

/// Handset
pub const ICON_PHONE: &str = r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path>"#;

/// Map pin
pub const ICON_MAP_PIN: &str = r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"></path><circle cx="12" cy="10" r="3"></circle>"#;

/// Box with outbound arrow
pub const ICON_EXTERNAL_LINK: &str = r#"<path d="M15 3h6v6"></path><path d="M10 14 21 3"></path><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>"#;
