//! One-time reveal transitions.
//!
//! Elements carrying [`REVEAL_CLASS`] start hidden once the document root has
//! [`SCRIPTED_CLASS`]. The first time one intersects the viewport it gains
//! [`VISIBLE_CLASS`] and stays revealed. Static output has no script, so
//! nothing there is hidden.

use std::collections::HashSet;

/// Marks an element as waiting for its first sighting.
pub const REVEAL_CLASS: &str = "reveal";
/// Added once the element has been seen.
pub const VISIBLE_CLASS: &str = "is-visible";
/// Attribute carrying the element's reveal key.
pub const REVEAL_ATTR: &str = "data-reveal";
/// Class the browser build puts on `<html>`. Without it, reveal elements
/// render in their final state.
pub const SCRIPTED_CLASS: &str = "js";

/// Entry direction of a reveal transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    /// Rise up from below
    #[default]
    Below,
    /// Slide in from the left
    Left,
    /// Slide in from the right
    Right,
    /// Grow from a smaller scale
    Scale,
    /// Fade only
    Fade,
}

impl RevealFrom {
    fn modifier(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal-up",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
            RevealFrom::Scale => "reveal-scale",
            RevealFrom::Fade => "reveal-fade",
        }
    }
}

/// `class` attribute for a revealable element.
pub fn reveal_class(from: RevealFrom, extra: &str) -> String {
    if extra.is_empty() {
        format!("{REVEAL_CLASS} {}", from.modifier())
    } else {
        format!("{REVEAL_CLASS} {} {extra}", from.modifier())
    }
}

/// Inline `transition-delay` for staggered reveals.
pub fn reveal_delay(seconds: f64) -> String {
    format!("transition-delay: {seconds:.2}s;")
}

/// Inline `animation-delay` for entrance animations that run on mount.
pub fn enter_delay(seconds: f64) -> String {
    format!("animation-delay: {seconds:.2}s;")
}

/// Remembers which elements have already been revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    seen: HashSet<String>,
}

impl RevealTracker {
    /// Tracker with nothing revealed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection. Returns `true` only the first time `key`
    /// becomes visible; later sightings and non-intersecting reports return
    /// `false`.
    pub fn observe(&mut self, key: &str, intersecting: bool) -> bool {
        intersecting && self.seen.insert(key.to_string())
    }

    /// Whether `key` has been revealed.
    pub fn is_revealed(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Number of revealed elements.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been revealed yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_element() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe("skills", false));
        assert!(tracker.observe("skills", true));
        assert!(!tracker.observe("skills", true));
        assert!(!tracker.observe("skills", false));
        assert!(tracker.observe("projects", true));
        assert_eq!(tracker.len(), 2);
        assert!(tracker.is_revealed("skills"));
        assert!(!tracker.is_revealed("contact"));
    }

    #[test]
    fn class_and_delay() {
        assert_eq!(reveal_class(RevealFrom::Left, ""), "reveal reveal-left");
        assert_eq!(
            reveal_class(RevealFrom::Below, "project-card"),
            "reveal reveal-up project-card"
        );
        assert_eq!(reveal_delay(0.4), "transition-delay: 0.40s;");
        assert_eq!(enter_delay(0.9), "animation-delay: 0.90s;");
    }
}
