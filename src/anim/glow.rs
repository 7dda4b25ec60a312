//! Ambient cursor glow for card-style buttons.
//!
//! The listener sits on the document, not the card, so the glow keeps
//! tracking the cursor even when it is outside the card's bounds. The
//! offset is normalized against the card's own half-size; the stylesheet
//! turns `--pointer-x` / `--pointer-y` into the glow translation.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, PointerEvent};

use crate::anim::frame::FrameScheduler;
use crate::anim::pointer::normalized_offset;
use crate::anim::set_css_var;

pub struct AmbientGlow {
    scheduler: FrameScheduler,
    on_move: Closure<dyn FnMut(PointerEvent)>,
}

impl AmbientGlow {
    pub fn mount(card: HtmlElement) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let pointer: Rc<Cell<(f64, f64)>> = Rc::new(Cell::new((0.0, 0.0)));

        let scheduler = {
            let pointer = pointer.clone();
            FrameScheduler::new(move || {
                let (x, y) = pointer.get();
                let rect = card.get_bounding_client_rect();
                let (nx, ny) =
                    normalized_offset(x, y, rect.left(), rect.top(), rect.width(), rect.height());
                set_css_var(&card, "--pointer-x", &format!("{nx:.3}"));
                set_css_var(&card, "--pointer-y", &format!("{ny:.3}"));
            })
        };

        let on_move = {
            let pointer = pointer.clone();
            let scheduler = scheduler.clone();
            Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
                pointer.set((event.client_x() as f64, event.client_y() as f64));
                scheduler.schedule();
            })
        };
        document
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { scheduler, on_move })
    }
}

impl Drop for AmbientGlow {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                "pointermove",
                self.on_move.as_ref().unchecked_ref(),
            );
        }
        self.scheduler.cancel();
    }
}
