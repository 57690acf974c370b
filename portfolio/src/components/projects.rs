//! Projects section and its card gallery.

use leptos::prelude::*;

use super::icons::{Glyph, ICON_EXTERNAL_LINK};
use super::SectionHeading;
use crate::motion::RevealFrom;
use crate::motion::reveal::{reveal_class, reveal_delay};
use crate::types::{PLACEHOLDER_IMAGE, Project};

/// Swap a broken image for the placeholder, once.
fn image_fallback() -> String {
    format!("this.onerror=null;this.src='{PLACEHOLDER_IMAGE}';")
}

/// `#projects`: heading plus the gallery.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <div class="container">
                <SectionHeading reveal_key="projects-title" title="Meus Projetos" />
                <ProjectGallery projects=projects />
            </div>
        </section>
    }
}

/// One card per project, in table order.
#[component]
pub fn ProjectGallery(projects: Vec<Project>) -> impl IntoView {
    view! {
        <div class="project-grid">
            {projects
                .into_iter()
                .enumerate()
                .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let image = project.image_src().to_string();
    let Project {
        title,
        description,
        tech,
        link,
        ..
    } = project;
    let alt = title.clone();
    let key = title.clone();
    let link_label = format!("Abrir {title}");

    view! {
        <article
            class=reveal_class(RevealFrom::Below, "project-card")
            style=reveal_delay(index as f64 * 0.2)
            data-reveal=format!("project-{index}")
            data-project=key
        >
            <div class="project-media">
                <img class="project-image" src=image alt=alt onerror=image_fallback() />
                <div class="project-shade"></div>
                <a
                    class="project-link"
                    href=link
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link_label
                >
                    <Glyph markup=ICON_EXTERNAL_LINK size="16" />
                </a>
            </div>
            <div class="project-body">
                <h3 class="project-title">{title}</h3>
                <p class="project-description">{description}</p>
                <div class="project-tech">
                    {tech
                        .into_iter()
                        .map(|t| view! { <span class="tech-badge">{t}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
