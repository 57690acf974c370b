//! Document scroll progress and the parallax offset derived from it.

use leptos::prelude::*;

/// Fraction of the scrollable distance already traversed, in `[0, 1]`.
///
/// `offset` is the current scroll position, `content_height` the full
/// document height and `viewport_height` the visible height. A document that
/// fits in the viewport reports 0.
pub fn scroll_fraction(offset: f64, content_height: f64, viewport_height: f64) -> f64 {
    let scrollable = content_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Vertical translation of the background layer: `0%` at the top, `100%`
/// at the bottom.
pub fn parallax_offset(fraction: f64) -> String {
    let pct = clamp_fraction(fraction) * 100.0;
    format!("{}%", (pct * 100.0).round() / 100.0)
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Reactive scroll fraction. Writes are clamped into `[0, 1]`.
#[derive(Clone)]
pub struct ScrollProgress {
    cell: ArcRwSignal<f64>,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self {
            cell: ArcRwSignal::new(0.0),
        }
    }
}

impl std::fmt::Debug for ScrollProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollProgress")
            .field("fraction", &self.latest())
            .finish()
    }
}

impl ScrollProgress {
    /// Progress starting at the top of the page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new fraction.
    pub fn record(&self, fraction: f64) {
        self.cell.set(clamp_fraction(fraction));
    }

    /// Recompute from raw document measurements.
    pub fn measure(&self, offset: f64, content_height: f64, viewport_height: f64) {
        self.record(scroll_fraction(offset, content_height, viewport_height));
    }

    /// Current fraction, tracked.
    pub fn fraction(&self) -> f64 {
        self.cell.get()
    }

    /// Current fraction without subscribing.
    pub fn latest(&self) -> f64 {
        self.cell.get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_endpoints() {
        assert_eq!(scroll_fraction(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(2200.0, 3000.0, 800.0), 1.0);
    }

    #[test]
    fn monotonic_while_scrolling_down() {
        let (content, viewport) = (5123.0, 917.0);
        let mut last = 0.0;
        let mut offset = 0.0;
        while offset <= content - viewport {
            let f = scroll_fraction(offset, content, viewport);
            assert!(f >= last);
            assert!((0.0..=1.0).contains(&f));
            last = f;
            offset += 7.5;
        }
        assert_eq!(scroll_fraction(content - viewport, content, viewport), 1.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_fraction(-40.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(2300.0, 3000.0, 800.0), 1.0);
    }

    #[test]
    fn short_document_reports_top() {
        assert_eq!(scroll_fraction(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(10.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn parallax_maps_linearly() {
        assert_eq!(parallax_offset(0.0), "0%");
        assert_eq!(parallax_offset(0.5), "50%");
        assert_eq!(parallax_offset(1.0), "100%");
        assert_eq!(parallax_offset(0.125), "12.5%");
        assert_eq!(parallax_offset(2.0), "100%");
        assert_eq!(parallax_offset(f64::NAN), "0%");
    }

    #[test]
    fn progress_cell_clamps_writes() {
        let progress = ScrollProgress::new();
        progress.record(1.7);
        assert_eq!(progress.latest(), 1.0);
        progress.measure(1100.0, 3000.0, 800.0);
        assert_eq!(progress.latest(), 0.5);
    }
}
