#![cfg(feature = "ssr")]

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use portfolio_leptos::components::{ProjectGallery, SkillBadges, SkillGlobe};
use portfolio_leptos::content;
use portfolio_leptos::motion::reveal::SCRIPTED_CLASS;
use portfolio_leptos::render_portfolio;
use portfolio_leptos::styles::PORTFOLIO_CSS;
use portfolio_leptos::types::Project;
use pretty_assertions::assert_eq;

/// Values of `attr="..."` in document order.
fn attr_values(html: &str, attr: &str) -> Vec<String> {
    let needle = format!(r#"{attr}=""#);
    html.match_indices(&needle)
        .map(|(i, _)| {
            let rest = &html[i + needle.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn gallery_renders_one_card_per_project_in_order() {
    let html = view! { <ProjectGallery projects=content::projects() /> }.to_html();

    assert_eq!(
        attr_values(&html, "data-project"),
        vec!["E-commerce Platform", "Task Management App", "Portfolio Website"]
    );
    assert_eq!(html.matches("<article").count(), 3);
}

#[test]
fn cards_show_description_and_every_tech_badge() {
    let html = view! { <ProjectGallery projects=content::projects() /> }.to_html();

    for project in content::projects() {
        let start = html
            .find(&format!(r#"data-project="{}""#, project.title))
            .unwrap();
        let end = html[start..]
            .find("</article>")
            .map(|e| start + e)
            .unwrap();
        let card = &html[start..end];

        assert!(card.contains(&project.description));
        let badges: Vec<_> = card
            .split(r#"<span class="tech-badge">"#)
            .skip(1)
            .map(|s| s[..s.find("</span>").unwrap()].to_string())
            .collect();
        assert_eq!(badges, project.tech);
    }
}

#[test]
fn empty_gallery_renders_no_cards() {
    let html = view! { <ProjectGallery projects={Vec::<Project>::new()} /> }.to_html();

    assert!(html.contains("project-grid"));
    assert_eq!(html.matches("<article").count(), 0);
}

#[test]
fn missing_image_uses_placeholder() {
    let project = Project {
        title: "No Screenshot".into(),
        description: "d".into(),
        ..Default::default()
    };
    let html = view! { <ProjectGallery projects=vec![project] /> }.to_html();

    assert!(html.contains(r#"src="/placeholder.svg""#));
    assert!(html.contains("onerror="));
}

#[test]
fn globe_has_one_ring_slot_per_skill() {
    let skills = content::skills();
    let html = view! { <SkillGlobe skills=skills.clone() /> }.to_html();

    let names: Vec<String> = skills.iter().map(|s| s.name.clone()).collect();
    assert_eq!(attr_values(&html, "data-skill"), names);
    assert_eq!(
        attr_values(&html, "data-angle"),
        vec!["0.00", "51.43", "102.86", "154.29", "205.71", "257.14", "308.57"]
    );
    assert_eq!(html.matches("orbit-particle").count(), 8);
}

#[test]
fn empty_globe_renders_decoration_only() {
    let html = view! { <SkillGlobe skills=vec![] /> }.to_html();

    assert!(html.contains("globe-core"));
    assert!(attr_values(&html, "data-skill").is_empty());
}

#[test]
fn skill_badges_keep_table_order() {
    let skills = content::skills();
    let html = view! { <SkillBadges skills=skills.clone() /> }.to_html();

    let names: Vec<String> = skills.iter().map(|s| s.name.clone()).collect();
    assert_eq!(attr_values(&html, "data-skill"), names);
    assert!(html.contains("color: #E34F26;"));
}

#[test]
fn full_page_has_seven_ring_slots_and_seven_badges() {
    let html = render_portfolio(&content::published());

    assert_eq!(html.matches(r#"class="reveal reveal-scale ring-slot""#).count(), 7);
    assert_eq!(html.matches(r#"class="skill-badge""#).count(), 7);
    assert_eq!(html.matches(r#"class="particle""#).count(), 50);
}

#[test]
fn static_page_parks_cursor_and_background_at_origin() {
    let html = render_portfolio(&content::published());

    assert!(html.contains("transform: translate3d(-12.0px, -12.0px, 0);"));
    assert!(html.contains("transform: translateY(0%);"));
}

#[test]
fn social_links_point_at_profiles() {
    let html = render_portfolio(&content::published());

    for label in ["GitHub", "LinkedIn", "Instagram"] {
        assert!(html.contains(label), "missing {label}");
    }
    assert_eq!(html.matches(r#"class="reveal reveal-up social-link""#).count(), 3);
}

#[test]
fn static_document_leaves_revealable_content_visible() {
    let html = render_portfolio(&content::published());

    // Nothing in the static page ever adds the scripted class
    assert!(!html.contains("<script"));
    assert!(!html.contains(&format!(r#"class="{SCRIPTED_CLASS}""#)));
    assert_eq!(html.matches("is-visible\"").count(), 0);
    assert!(html.matches(r#"class="reveal "#).count() >= 21);

    // Every rule that hides a reveal element is scoped to the scripted root
    let hiding: Vec<&str> = PORTFOLIO_CSS
        .lines()
        .map(str::trim)
        .filter(|rule| rule.contains(".reveal"))
        .filter(|rule| {
            rule.contains("opacity: 0;") || rule.contains("translate: 0 50px")
                || rule.contains("translate: -50px 0") || rule.contains("translate: 50px 0")
                || rule.contains("scale: 0.5")
        })
        .collect();
    assert_eq!(hiding.len(), 5);
    for rule in hiding {
        assert!(rule.starts_with(&format!(".{SCRIPTED_CLASS} ")), "unscoped: {rule}");
    }
}
