//! One-shot section reveals.
//!
//! Every `[data-reveal]` element gets the `revealed` class the first time at
//! least 15% of it enters the viewport, then stops being observed. The
//! stylesheet only hides unrevealed elements once `reveal-armed` is on the
//! body, so a missing IntersectionObserver degrades to a static page.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_THRESHOLD: f64 = 0.15;
const REVEALED_CLASS: &str = "revealed";

/// Marking is monotonic: an element already carrying the class never
/// transitions again, no matter how often it re-enters the viewport.
pub fn should_mark(is_intersecting: bool, already_marked: bool) -> bool {
    is_intersecting && !already_marked
}

pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Observes all currently marked elements. Runs on every viewport width.
    pub fn mount() -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let already = target.class_list().contains(REVEALED_CLASS);
                    if should_mark(true, already) {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        init.threshold(&REVEAL_THRESHOLD.into());
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .ok()?;

        // Arm the entrance styling only once observation is actually live.
        if let Some(body) = document.body() {
            let _ = body.class_list().add_1("reveal-armed");
        }

        let marked = document.query_selector_all("[data-reveal]").ok()?;
        for i in 0..marked.length() {
            if let Some(node) = marked.get(i) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    observer.observe(&element);
                }
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::should_mark;

    #[test]
    fn reveal_fires_exactly_once() {
        // Simulate an element drifting in and out of the viewport: only the
        // first intersecting observation while unmarked may mark it.
        let history = [true, false, true, true, false, true];
        let mut marked = false;
        let mut marks = 0;
        for intersecting in history {
            if should_mark(intersecting, marked) {
                marked = true;
                marks += 1;
            }
        }
        assert_eq!(marks, 1);
        assert!(marked);
    }

    #[test]
    fn offscreen_elements_are_never_marked() {
        assert!(!should_mark(false, false));
        assert!(!should_mark(false, true));
    }
}
