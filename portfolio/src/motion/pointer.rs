//! Latest pointer coordinates as a reactive value cell.

use leptos::prelude::*;

use crate::types::PointerPosition;

/// Half the cursor follower's size; the follower is centred on the pointer.
pub const FOLLOWER_OFFSET: f64 = 12.0;

/// Single-writer, many-reader cell holding the last pointer position.
///
/// The browser's `mousemove` handler is the only writer. Every write replaces
/// the previous value outright; smoothing belongs to the follower, not here.
#[derive(Clone)]
pub struct PointerTracker {
    cell: ArcRwSignal<PointerPosition>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            cell: ArcRwSignal::new(PointerPosition::default()),
        }
    }
}

impl std::fmt::Debug for PointerTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerTracker")
            .field("position", &self.latest())
            .finish()
    }
}

impl PointerTracker {
    /// Tracker starting at the viewport origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored position.
    pub fn record(&self, x: f64, y: f64) {
        self.cell.set(PointerPosition::new(x, y));
    }

    /// Current position, tracked by the reactive graph.
    pub fn position(&self) -> PointerPosition {
        self.cell.get()
    }

    /// Current position without subscribing.
    pub fn latest(&self) -> PointerPosition {
        self.cell.get_untracked()
    }
}

/// Top-left corner for a follower centred on `position`.
pub fn follower_origin(position: PointerPosition) -> PointerPosition {
    PointerPosition::new(position.x - FOLLOWER_OFFSET, position.y - FOLLOWER_OFFSET)
}
