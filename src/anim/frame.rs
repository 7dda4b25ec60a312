//! Single-flight requestAnimationFrame scheduling.
//!
//! Scroll and pointer events arrive far faster than the display refreshes;
//! each controller funnels its recompute through one of these so at most one
//! frame request is pending at a time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

struct SchedulerInner {
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<SchedulerInner>,
}

impl FrameScheduler {
    /// `update` runs once per granted frame; the pending flag is cleared
    /// before it runs so the update may schedule a follow-up frame.
    pub fn new(mut update: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(SchedulerInner {
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let tick = Closure::<dyn FnMut()>::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.pending.set(None);
            }
            update();
        });
        *inner.tick.borrow_mut() = Some(tick);
        Self { inner }
    }

    /// No-op while a frame is already pending.
    pub fn schedule(&self) {
        if self.inner.pending.get().is_some() {
            return;
        }
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let tick = self.inner.tick.borrow();
        if let Some(tick) = tick.as_ref() {
            if let Ok(id) = window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                self.inner.pending.set(Some(id));
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.inner.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}
