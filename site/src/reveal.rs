//! IntersectionObserver driving the one-time `.reveal` transitions.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use portfolio_leptos::motion::RevealTracker;
use portfolio_leptos::motion::reveal::{REVEAL_ATTR, REVEAL_CLASS, SCRIPTED_CLASS, VISIBLE_CLASS};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of an element that must be visible before it reveals.
const THRESHOLD: f64 = 0.15;

/// Tag `<html>` so the stylesheet starts `.reveal` elements hidden.
pub fn mark_scripted() {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().add_1(SCRIPTED_CLASS);
    }
}

/// Mark `element` visible. Returns `false` when it already was.
pub fn reveal(element: &Element, tracker: &mut RevealTracker) -> bool {
    let key = element
        .get_attribute(REVEAL_ATTR)
        .unwrap_or_else(|| element.id());
    if !tracker.observe(&key, true) {
        return false;
    }
    let _ = element.class_list().add_1(VISIBLE_CLASS);
    true
}

/// Observe every `.reveal` element currently in the document.
///
/// Call after the page has mounted. The observer is disconnected when the
/// calling owner is disposed.
pub fn use_reveal_on_scroll() {
    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut tracker = tracker.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    reveal(&target, &mut tracker);
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(_) => {
                // No IntersectionObserver: show everything at once
                reveal_all(&document);
                return;
            }
        };

        if let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    observer.observe(&el);
                }
            }
        }

        let held = StoredValue::new_local((observer, callback));
        on_cleanup(move || {
            held.with_value(|(observer, _)| observer.disconnect());
        });
    });
}

fn reveal_all(document: &web_sys::Document) {
    let mut tracker = RevealTracker::new();
    if let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                reveal(&el, &mut tracker);
            }
        }
    }
}
