//! Pointer-driven 3D tilt for the hero showcase.
//!
//! Two elements tilt independently from the same pointer: the browser frame
//! (subtle) and the floating overlay (more dramatic, plus a fixed depth
//! push while hovered). Each target recomputes its own bounding box per
//! sample because the concurrent scroll animation shifts layout under it.
//!
//! Writes are suppressed while the gate is disabled, and every tilt
//! variable snaps back to neutral on the gate-disabled edge so stale
//! transforms never fight the scroll-driven ones.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, PointerEvent};

use crate::anim::frame::FrameScheduler;
use crate::anim::gate::{GateHandle, SubscriptionId};
use crate::anim::pointer::normalized_offset;
use crate::anim::set_css_var;
use crate::config;
use crate::utils::analytics;

const MAX_ROTATE_FRAME: f64 = 6.0;
const MAX_ROTATE_OVERLAY: f64 = 10.0;
const OVERLAY_DEPTH_PX: f64 = 40.0;

/// One tilting element. Frame and overlay are independent instances fed
/// the same pointer samples.
#[derive(Clone)]
struct TiltTarget {
    element: HtmlElement,
    max_rotate: f64,
    hover_depth: Option<f64>,
}

impl TiltTarget {
    fn frame(element: HtmlElement) -> Self {
        Self {
            element,
            max_rotate: MAX_ROTATE_FRAME,
            hover_depth: None,
        }
    }

    fn overlay(element: HtmlElement) -> Self {
        Self {
            element,
            max_rotate: MAX_ROTATE_OVERLAY,
            hover_depth: Some(OVERLAY_DEPTH_PX),
        }
    }

    /// Re-queries the bounding box every sample; never cached.
    fn apply(&self, client_x: f64, client_y: f64) {
        let rect = self.element.get_bounding_client_rect();
        let (x, y) = normalized_offset(
            client_x,
            client_y,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        );
        set_css_var(&self.element, "--ry", &format!("{:.2}", x * self.max_rotate));
        set_css_var(&self.element, "--rx", &format!("{:.2}", -y * self.max_rotate));
        if let Some(depth) = self.hover_depth {
            set_css_var(&self.element, "--tz", &format!("{depth}px"));
        }
    }

    fn reset(&self) {
        set_css_var(&self.element, "--rx", "0");
        set_css_var(&self.element, "--ry", "0");
        if self.hover_depth.is_some() {
            set_css_var(&self.element, "--tz", "0px");
        }
    }
}

pub struct TiltController {
    container: HtmlElement,
    scheduler: FrameScheduler,
    on_move: Closure<dyn FnMut(PointerEvent)>,
    on_leave: Closure<dyn FnMut(PointerEvent)>,
    gate: GateHandle,
    gate_sub: SubscriptionId,
}

impl TiltController {
    /// Attach to a showcase. Returns None on narrow viewports.
    pub fn mount(
        container: HtmlElement,
        frame: HtmlElement,
        overlay: HtmlElement,
        gate: GateHandle,
    ) -> Option<Self> {
        if config::is_narrow_viewport() {
            return None;
        }

        let targets = [TiltTarget::frame(frame), TiltTarget::overlay(overlay)];
        let pointer: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));

        let scheduler = {
            let pointer = pointer.clone();
            let gate = gate.clone();
            let targets = targets.clone();
            FrameScheduler::new(move || {
                let (x, y) = match pointer.get() {
                    Some(position) => position,
                    None => return,
                };
                if !gate.is_enabled() {
                    return;
                }
                for target in &targets {
                    target.apply(x, y);
                }
            })
        };

        let on_move = {
            let pointer = pointer.clone();
            let scheduler = scheduler.clone();
            let hover_tracked = Cell::new(false);
            Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
                pointer.set(Some((event.client_x() as f64, event.client_y() as f64)));
                if !hover_tracked.get() {
                    hover_tracked.set(true);
                    analytics::track("showcase_3d_hover");
                }
                scheduler.schedule();
            })
        };

        let on_leave = {
            let pointer = pointer.clone();
            let scheduler = scheduler.clone();
            let gate = gate.clone();
            let targets = targets.clone();
            Closure::<dyn FnMut(PointerEvent)>::new(move |_: PointerEvent| {
                pointer.set(None);
                scheduler.cancel();
                // While the gate is closed the scroll animation owns the
                // transforms; leave them alone.
                if gate.is_enabled() {
                    for target in &targets {
                        target.reset();
                    }
                }
            })
        };

        let gate_sub = gate.subscribe(move |enabled| {
            if !enabled {
                for target in &targets {
                    target.reset();
                }
            }
        });

        container
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
            .ok()?;
        container
            .add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            container,
            scheduler,
            on_move,
            on_leave,
            gate,
            gate_sub,
        })
    }
}

impl Drop for TiltController {
    fn drop(&mut self) {
        let _ = self.container.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self.container.remove_event_listener_with_callback(
            "pointerleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
        self.scheduler.cancel();
        self.gate.unsubscribe(self.gate_sub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_rotation_spans_its_maximum_at_the_edges() {
        // Pointer at the right edge of a 400x300 frame at the origin.
        let (fx, fy) = normalized_offset(400.0, 150.0, 0.0, 0.0, 400.0, 300.0);
        assert_eq!((fx * MAX_ROTATE_FRAME, -fy * MAX_ROTATE_FRAME), (6.0, 0.0));
        // Top-left corner tilts away on both axes.
        let (fx, fy) = normalized_offset(0.0, 0.0, 0.0, 0.0, 400.0, 300.0);
        assert_eq!(fx * MAX_ROTATE_FRAME, -6.0);
        assert_eq!(-fy * MAX_ROTATE_FRAME, 6.0);
    }

    #[test]
    fn overlay_rotates_more_dramatically_than_frame() {
        assert!(MAX_ROTATE_OVERLAY > MAX_ROTATE_FRAME);
        let (ox, _) = normalized_offset(400.0, 150.0, 0.0, 0.0, 400.0, 300.0);
        assert_eq!(ox * MAX_ROTATE_OVERLAY, 10.0);
    }
}
