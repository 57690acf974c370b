//! CSS for the portfolio page.
//!
//! Inlined by [`crate::render_portfolio`] and copied into the Trunk bundle by
//! the site crate. Keyframe names here are the ones
//! [`crate::motion::LoopAnimation`] values refer to (`ring-bob`, `ring-spin`,
//! `float`, `orbit`).
//!
//! Transforms use the individual `translate`/`scale`/`rotate` properties so a
//! reveal transition, an inline `transform` and a looping animation can all
//! apply to one element without overriding each other.

/// Complete stylesheet - dark purple/pink theme.
pub const PORTFOLIO_CSS: &str = r#"
:root {
    --bg-0: #111827;
    --bg-1: #000000;
    --bg-2: #1f2937;
    --card: rgba(31, 41, 55, 0.5);
    --border: #374151;
    --text: #ffffff;
    --text-soft: #d1d5db;
    --text-dim: #9ca3af;
    --purple: #a855f7;
    --purple-soft: #c084fc;
    --pink: #ec4899;
    --red: #ef4444;
    --gradient: linear-gradient(90deg, var(--purple-soft), var(--pink), var(--red));
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    color: var(--text);
    background: linear-gradient(135deg, var(--bg-0), var(--bg-1) 50%, var(--bg-2));
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }

.container { width: 100%; max-width: 1280px; margin: 0 auto; padding: 0 24px; }

.gradient-text {
    background: var(--gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

/* ---------------------------------------------------------------- cursor */

.cursor-follower {
    position: fixed;
    top: 0;
    left: 0;
    width: 24px;
    height: 24px;
    border-radius: 50%;
    background: linear-gradient(90deg, var(--purple), var(--pink));
    pointer-events: none;
    z-index: 50;
    mix-blend-mode: difference;
    will-change: transform;
}

/* ------------------------------------------------------------- particles */

.particle-field {
    position: fixed;
    inset: 0;
    opacity: 0.2;
    pointer-events: none;
    will-change: transform;
}

.particle {
    position: absolute;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: var(--purple-soft);
    opacity: 0;
}

@keyframes float {
    0%, 100% { translate: 0 0; opacity: 0; }
    50% { translate: 0 -100px; opacity: 1; }
}

/* ------------------------------------------------------------------ hero */

.hero { min-height: 100vh; display: flex; align-items: center; position: relative; }

.hero-grid { display: grid; gap: 48px; align-items: center; }

@media (min-width: 1024px) { .hero-grid { grid-template-columns: 1fr 1fr; } }

.hero-title { font-size: clamp(3.75rem, 10vw, 6rem); font-weight: 700; margin: 0; transition: scale 0.3s; }
.hero-title:hover { scale: 1.05; }
.hero-tagline { font-size: 1.5rem; color: var(--text-soft); }
.hero-summary { font-size: 1.125rem; color: var(--text-dim); max-width: 32rem; }
.hero-actions { display: flex; gap: 16px; }

.btn {
    display: inline-block;
    padding: 12px 32px;
    border-radius: 8px;
    font-weight: 600;
    transition: scale 0.3s, background 0.3s, color 0.3s;
}
.btn:hover { scale: 1.05; }
.btn-primary { background: linear-gradient(90deg, #9333ea, #db2777); }
.btn-outline { border: 1px solid var(--purple); color: var(--purple-soft); }
.btn-outline:hover { background: var(--purple); color: var(--text); }

.hero-portrait { position: relative; width: 320px; height: 320px; margin: 0 auto; }

.portrait-halo {
    position: absolute;
    inset: 0;
    border-radius: 50%;
    background: linear-gradient(90deg, var(--purple), var(--pink));
    filter: blur(24px);
    opacity: 0.3;
    animation: halo 8s linear infinite;
}

@keyframes halo {
    0% { scale: 1; rotate: 0deg; }
    50% { scale: 1.2; rotate: 180deg; }
    100% { scale: 1; rotate: 360deg; }
}

.portrait-frame {
    position: relative;
    width: 100%;
    height: 100%;
    border-radius: 50%;
    border: 4px solid var(--purple);
    overflow: hidden;
    background: var(--bg-2);
}

.portrait-img { width: 100%; height: 100%; object-fit: cover; }

.portrait-tile {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 3.75rem;
    font-weight: 700;
    color: var(--purple-soft);
    background: linear-gradient(135deg, #374151, var(--bg-0));
}

/* Entrance animations (run once on load) */
.enter-left, .enter-fade, .enter-up, .enter-scale { animation-duration: 0.8s; animation-fill-mode: both; }
.enter-left { animation-name: enter-left; }
.enter-fade { animation-name: enter-fade; }
.enter-up { animation-name: enter-up; }
.enter-scale { animation-name: enter-scale; }

@keyframes enter-left { from { opacity: 0; translate: -50px 0; } to { opacity: 1; translate: 0 0; } }
@keyframes enter-fade { from { opacity: 0; } to { opacity: 1; } }
@keyframes enter-up { from { opacity: 0; translate: 0 20px; } to { opacity: 1; translate: 0 0; } }
@keyframes enter-scale { from { opacity: 0; scale: 0.8; } to { opacity: 1; scale: 1; } }

/* ------------------------------------------------------- reveal on scroll */

/* Hidden only after the browser build tags the root element with .js */
.reveal { transition: opacity 0.8s ease, translate 0.8s ease, scale 0.8s ease; }
.js .reveal { opacity: 0; }
.js .reveal-up { translate: 0 50px; }
.js .reveal-left { translate: -50px 0; }
.js .reveal-right { translate: 50px 0; }
.js .reveal-scale { scale: 0.5; }
.js .reveal.is-visible { opacity: 1; translate: 0 0; scale: 1; }

/* ---------------------------------------------------------------- skills */

.skills, .projects, .contact { padding: 80px 0; position: relative; }
.skills { overflow: hidden; }

.section-title { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; text-align: center; margin: 0 0 64px; }

.globe-stage { display: flex; justify-content: center; align-items: center; min-height: 600px; perspective: 1000px; }

.skill-globe { position: relative; width: 384px; height: 384px; transform-style: preserve-3d; }
.skill-globe.is-visible:hover, html:not(.js) .skill-globe:hover { scale: 1.1; }

.globe-base {
    position: absolute;
    inset: 0;
    border-radius: 50%;
    border: 2px solid rgba(168, 85, 247, 0.3);
    background: linear-gradient(135deg, rgba(88, 28, 135, 0.2), rgba(131, 24, 67, 0.2));
    backdrop-filter: blur(4px);
    animation: globe-spin 20s linear infinite, globe-wobble 8s ease-in-out infinite;
}

@keyframes globe-spin { to { rotate: y 360deg; } }
@keyframes globe-wobble {
    0%, 50%, 100% { transform: rotateX(0deg); }
    25% { transform: rotateX(15deg); }
    75% { transform: rotateX(-15deg); }
}

.globe-line { position: absolute; border-radius: 50%; border: 1px solid rgba(192, 132, 252, 0.2); }
.globe-line-outer { inset: 0; }
.globe-line-mid { inset: 16px; border-color: rgba(192, 132, 252, 0.15); }
.globe-line-inner { inset: 32px; border-color: rgba(192, 132, 252, 0.1); }

.ring-slot { position: absolute; width: 64px; height: 64px; }

.ring-bob { width: 100%; height: 100%; }

@keyframes ring-bob {
    0%, 100% { translate: 0 0; }
    50% { translate: 0 -10px; }
}

.ring-badge {
    position: relative;
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    border: 2px solid var(--border);
    background: rgba(31, 41, 55, 0.8);
    backdrop-filter: blur(4px);
    cursor: pointer;
    transition: scale 0.3s, border-color 0.3s, box-shadow 0.3s;
}

@keyframes ring-spin { to { rotate: y -360deg; } }

.ring-badge:hover {
    scale: 1.3;
    border-color: var(--skill-color);
    box-shadow: 0 0 20px color-mix(in srgb, var(--skill-color) 31%, transparent);
}

.ring-tooltip {
    position: absolute;
    top: -48px;
    left: 50%;
    translate: -50% 10px;
    padding: 4px 12px;
    border-radius: 8px;
    background: var(--bg-0);
    font-size: 0.875rem;
    font-weight: 500;
    white-space: nowrap;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s, translate 0.3s;
    z-index: 10;
}
.ring-badge:hover .ring-tooltip { opacity: 1; translate: -50% 0; }

.globe-core {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 16px;
    height: 16px;
    translate: -50% -50%;
    border-radius: 50%;
    background: linear-gradient(90deg, var(--purple), var(--pink));
    filter: blur(4px);
    animation: core-pulse 3s ease-in-out infinite;
}

@keyframes core-pulse {
    0%, 100% { scale: 1; opacity: 0.5; }
    50% { scale: 1.5; opacity: 1; }
}

.orbit-particle {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--purple-soft);
}

@keyframes orbit {
    0% { translate: 0 0; rotate: 0deg; }
    50% { translate: var(--orbit-dx) var(--orbit-dy); rotate: 180deg; }
    100% { translate: 0 0; rotate: 360deg; }
}

.skills-caption { text-align: center; margin: 48px auto 0; max-width: 42rem; }
.skills-caption p { font-size: 1.125rem; color: var(--text-soft); margin-bottom: 24px; }

.skill-badges { display: flex; flex-wrap: wrap; justify-content: center; gap: 12px; }

.skill-badge {
    padding: 8px 16px;
    border-radius: 9999px;
    border: 1px solid var(--border);
    background: var(--card);
    font-size: 0.875rem;
    font-weight: 500;
    transition: border-color 0.3s, scale 0.3s, translate 0.3s;
}
.skill-badge:hover { border-color: var(--purple); scale: 1.05; translate: 0 -2px; }

/* -------------------------------------------------------------- projects */

.project-grid { display: grid; gap: 32px; }
@media (min-width: 1024px) { .project-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1280px) { .project-grid { grid-template-columns: repeat(3, 1fr); } }

.project-card {
    border: 1px solid var(--border);
    border-radius: 12px;
    background: var(--card);
    backdrop-filter: blur(4px);
    overflow: hidden;
}
.project-card.is-visible { transition: opacity 0.8s ease, translate 0.3s, border-color 0.3s; }
.project-card.is-visible:hover, html:not(.js) .project-card:hover { translate: 0 -10px; border-color: var(--purple); }

.project-media { position: relative; overflow: hidden; }
.project-image { display: block; width: 100%; height: 192px; object-fit: cover; transition: scale 0.5s; }
.project-card:hover .project-image { scale: 1.1; }
.project-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent); opacity: 0; transition: opacity 0.3s; }
.project-card:hover .project-shade { opacity: 1; }

.project-link {
    position: absolute;
    top: 16px;
    right: 16px;
    padding: 8px;
    border-radius: 6px;
    background: #9333ea;
    display: flex;
    opacity: 0;
    transition: opacity 0.3s, scale 0.3s;
}
.project-card:hover .project-link { opacity: 1; }
.project-link:hover { scale: 1.1; background: #7e22ce; }

.project-body { padding: 24px; }
.project-title { font-size: 1.25rem; font-weight: 600; margin: 0 0 8px; transition: color 0.3s; }
.project-card:hover .project-title { color: var(--purple-soft); }
.project-description { color: var(--text-dim); margin: 0 0 16px; }
.project-tech { display: flex; flex-wrap: wrap; gap: 8px; }
.tech-badge {
    padding: 4px 12px;
    border-radius: 9999px;
    border: 1px solid rgba(168, 85, 247, 0.3);
    background: rgba(147, 51, 234, 0.2);
    color: #d8b4fe;
    font-size: 0.875rem;
}

/* --------------------------------------------------------------- contact */

.contact-inner { max-width: 896px; }
.contact-grid { display: grid; gap: 48px; }
@media (min-width: 768px) { .contact-grid { grid-template-columns: 1fr 1fr; } }

.contact h3 { font-size: 1.5rem; font-weight: 600; margin: 0 0 24px; }
.contact-pitch { color: var(--text-dim); font-size: 1.125rem; }
.contact-list { list-style: none; padding: 0; margin: 32px 0 0; display: grid; gap: 16px; }

.contact-row { display: flex; align-items: center; gap: 16px; cursor: pointer; transition: translate 0.3s, color 0.3s; }
.contact-row:hover { translate: 10px 0; color: var(--purple-soft); }
.contact-icon { color: var(--purple-soft); flex-shrink: 0; transition: color 0.3s; }
.contact-row:hover .contact-icon, .social-link:hover .contact-icon { color: #f472b6; }

.social-links { display: grid; gap: 16px; }
.social-link {
    display: flex;
    align-items: center;
    gap: 16px;
    padding: 16px;
    border-radius: 8px;
    border: 1px solid var(--border);
    background: var(--card);
}
.social-link.is-visible { transition: opacity 0.8s ease, border-color 0.3s, translate 0.3s, scale 0.3s; }
.social-link.is-visible:hover, html:not(.js) .social-link:hover { border-color: var(--purple); translate: 10px 0; scale: 1.02; }
.social-arrow { margin-left: auto; opacity: 0; transition: opacity 0.3s; }
.social-link:hover .social-arrow { opacity: 1; }

/* ---------------------------------------------------------------- footer */

.footer { padding: 32px 0; border-top: 1px solid #1f2937; text-align: center; }
.footer-text { color: var(--text-dim); margin: 0; }

@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after { animation: none !important; transition: none !important; }
    .js .reveal { opacity: 1; translate: none; scale: none; }
    .cursor-follower { display: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_transition_overrides_keep_opacity_fade() {
        let overrides: Vec<&str> = PORTFOLIO_CSS
            .lines()
            .map(str::trim)
            .filter(|rule| rule.contains(".is-visible {") && rule.contains("transition:"))
            .collect();

        assert_eq!(overrides.len(), 2);
        for rule in overrides {
            assert!(rule.contains("opacity 0.8s"), "fade dropped: {rule}");
        }
    }
}
