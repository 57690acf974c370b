//! Skills section: the rotating globe with one badge per skill on a ring,
//! followed by the same skills as a row of text badges.

use leptos::prelude::*;

use super::icons::{Glyph, skill_glyph};
use super::SectionHeading;
use crate::motion::reveal::{reveal_class, reveal_delay};
use crate::motion::ring::{self, RingSlot};
use crate::motion::timeline::animation_style;
use crate::motion::RevealFrom;
use crate::types::Skill;

/// Ring badge size in pixels.
const BADGE_SIZE: f64 = 64.0;

/// `#skills`: heading, skill globe, caption and text badges.
#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="container">
                <SectionHeading reveal_key="skills-title" title="Minhas Skills" />
                <div class="globe-stage">
                    <SkillGlobe skills=skills.clone() />
                </div>
                <div
                    class=reveal_class(RevealFrom::Below, "skills-caption")
                    style=reveal_delay(0.5)
                    data-reveal="skills-caption"
                >
                    <p>"Tecnologias que domino e utilizo para criar experiências digitais incríveis"</p>
                    <SkillBadges skills=skills />
                </div>
            </div>
        </section>
    }
}

/// The globe: decorative rings, one badge per skill, a glowing core and
/// orbiting particles.
#[component]
pub fn SkillGlobe(skills: Vec<Skill>) -> impl IntoView {
    let slots = ring::layout_items(&skills);
    let badges = skills
        .into_iter()
        .zip(slots)
        .map(|(skill, ring_slot)| view! { <RingBadge skill=skill ring_slot=ring_slot /> })
        .collect_view();

    let orbits = ring::orbit_particles()
        .into_iter()
        .map(|p| view! { <span class="orbit-particle" style=p.style()></span> })
        .collect_view();

    view! {
        <div class=reveal_class(RevealFrom::Scale, "skill-globe") data-reveal="skill-globe">
            <div class="globe-base"></div>
            <div class="globe-line globe-line-outer"></div>
            <div class="globe-line globe-line-mid"></div>
            <div class="globe-line globe-line-inner"></div>
            {badges}
            <div class="globe-core"></div>
            {orbits}
        </div>
    }
}

/// One skill on the ring. The outer element bobs, the inner one spins, so
/// the two transform animations never fight over one element.
#[component]
fn RingBadge(skill: Skill, ring_slot: RingSlot) -> impl IntoView {
    let Skill { name, icon, color } = skill;
    let position = ring_slot.style(BADGE_SIZE);
    let bob = animation_style(&[ring_slot.bob()]);
    let spin = animation_style(&[ring_slot.spin()]);
    let accent = format!("--skill-color: {color};");
    let key = format!("ring-{}", ring_slot.index);
    let angle = format!("{:.2}", ring_slot.angle);
    let slot_style = format!("{position} {}", reveal_delay(ring_slot.phase));
    let label = name.clone();

    view! {
        <div
            class=reveal_class(RevealFrom::Scale, "ring-slot")
            style=slot_style
            data-reveal=key
            data-skill=label
            data-angle=angle
        >
            <div class="ring-bob" style=bob>
                <div class="ring-badge" style=format!("{accent} {spin}")>
                    <Glyph markup=skill_glyph(icon) size="32" color=color />
                    <span class="ring-tooltip">{name}</span>
                </div>
            </div>
        </div>
    }
}

/// Skill names as a wrapped row of colored pills.
#[component]
pub fn SkillBadges(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <div class="skill-badges">
            {skills
                .into_iter()
                .enumerate()
                .map(|(index, skill)| {
                    let style = format!(
                        "color: {}; {}",
                        skill.color,
                        reveal_delay(0.7 + index as f64 * 0.1),
                    );
                    let label = skill.name.clone();
                    view! {
                        <span class="skill-badge" style=style data-skill=label>
                            {skill.name}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
