//! Page root, plus the full HTML document used for static output.

use leptos::prelude::*;

use super::{ContactSection, CursorFollower, Footer, Hero, ParticleField, ProjectsSection, SkillsSection};
use crate::motion::particles::{PARTICLE_COUNT, PARTICLE_SEED, particle_field};
use crate::styles::PORTFOLIO_CSS;
use crate::types::{PointerPosition, PortfolioContent};

/// Everything inside `<body>`: cursor, background, four sections, footer.
///
/// The browser crate passes live signals; static rendering passes stored
/// values.
#[component]
pub fn PortfolioPage(
    content: PortfolioContent,
    /// Spring-smoothed pointer position driving the cursor follower
    #[prop(into)]
    cursor: Signal<PointerPosition>,
    /// Scroll fraction driving the background parallax
    #[prop(into)]
    scroll: Signal<f64>,
) -> impl IntoView {
    let PortfolioContent {
        profile,
        projects,
        skills,
        contact,
        socials,
        footer,
    } = content;

    view! {
        <div class="portfolio">
            <CursorFollower position=cursor />
            <ParticleField scroll=scroll particles=particle_field(PARTICLE_COUNT, PARTICLE_SEED) />
            <main>
                <Hero profile=profile />
                <SkillsSection skills=skills />
                <ProjectsSection projects=projects />
                <ContactSection contact=contact socials=socials />
            </main>
            <Footer text=footer />
        </div>
    }
}

/// Complete HTML document with inline styles, for prerendering.
#[component]
pub fn PortfolioDocument(content: PortfolioContent) -> impl IntoView {
    let title = format!("{} | Portfolio", content.profile.name);
    let description = content.profile.tagline.clone();

    view! {
        <html lang="pt-BR">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{PORTFOLIO_CSS}</style>
            </head>
            <body>
                <PortfolioPage
                    content=content
                    cursor=Signal::stored(PointerPosition::default())
                    scroll=Signal::stored(0.0)
                />
            </body>
        </html>
    }
}
