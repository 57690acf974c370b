//! Browser subscriptions feeding the motion cells.
//!
//! Each hook installs its listener when called inside a component and
//! removes it when that component's owner is disposed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use portfolio_leptos::motion::{PointerTracker, ScrollProgress, SpringConfig, SpringFollower};
use portfolio_leptos::types::PointerPosition;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Track `mousemove` over the window into a [`PointerTracker`].
pub fn use_pointer_tracker() -> PointerTracker {
    let tracker = PointerTracker::new();
    let writer = tracker.clone();
    let handle = window_event_listener(ev::mousemove, move |e: web_sys::MouseEvent| {
        writer.record(f64::from(e.client_x()), f64::from(e.client_y()));
    });
    on_cleanup(move || handle.remove());
    tracker
}

/// Current document scroll fraction, read straight from the DOM.
pub fn read_scroll_fraction() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let content = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    portfolio_leptos::motion::scroll_fraction(offset, content, viewport)
}

/// Keep a [`ScrollProgress`] in sync with window scroll and resize.
pub fn use_scroll_progress() -> ScrollProgress {
    let progress = ScrollProgress::new();
    progress.record(read_scroll_fraction());

    let on_scroll = {
        let progress = progress.clone();
        window_event_listener(ev::scroll, move |_| progress.record(read_scroll_fraction()))
    };
    let on_resize = {
        let progress = progress.clone();
        window_event_listener(ev::resize, move |_| progress.record(read_scroll_fraction()))
    };
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });
    progress
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(slot: &FrameSlot) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = slot.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// A `requestAnimationFrame` loop that reschedules itself every frame.
///
/// The scheduled closure owns its own slot. The first frame after
/// [`FrameLoop::stop`] empties that slot, releasing the closure and whatever
/// `tick` captured.
pub struct FrameLoop {
    alive: Arc<AtomicBool>,
    slot: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    /// Call `tick` with the frame timestamp (ms) on every animation frame.
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let next = slot.clone();
        let running = alive.clone();

        *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
            if !running.load(Ordering::Relaxed) {
                // wasm-bindgen defers freeing a closure until its running call returns
                let _ = next.borrow_mut().take();
                return;
            }
            tick(now);
            request_frame(&next);
        }));
        request_frame(&slot);

        Self {
            alive,
            slot: Rc::downgrade(&slot),
        }
    }

    /// Stop after the frame already scheduled.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Stop when the current owner is cleaned up.
    pub fn stop_on_cleanup(&self) {
        let alive = self.alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    /// Whether frames are still being delivered to `tick`.
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Whether the scheduled closure has been dropped.
    pub fn is_released(&self) -> bool {
        self.slot.strong_count() == 0
    }
}

/// Spring-smoothed copy of the tracker's position, stepped once per
/// animation frame until the owner is disposed.
pub fn use_spring_follower(tracker: PointerTracker, config: SpringConfig) -> RwSignal<PointerPosition> {
    let drawn = RwSignal::new(tracker.latest());
    let mut follower = SpringFollower::new(config, tracker.latest());
    let mut last_frame: Option<f64> = None;

    let frames = FrameLoop::start(move |now| {
        let dt = last_frame.map_or(0.0, |prev| (now - prev) / 1000.0);
        last_frame = Some(now);

        let target = tracker.latest();
        let position = follower.step(target, dt);
        if drawn.try_get_untracked() != Some(position) {
            drawn.try_set(position);
        }
    });
    frames.stop_on_cleanup();
    drawn
}
