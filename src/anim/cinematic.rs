//! Hero cinematic exit.
//!
//! The hero is fully visible on load. As the user scrolls through the 300vh
//! runway the showcase rotates and flies into deep space while the text
//! slides out to the left; the page holds still via position:sticky while
//! this plays. Each target animates over its own sub-range of the scroll
//! progress so the exit is staggered.
//!
//! Desktop only: on narrow viewports nothing is mounted and no styles are
//! written. The breakpoint is checked once at mount, not on resize.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, HtmlElement};

use crate::anim::easing::{lerp, progress, EASE_IN_APPLE, EASE_IN_OUT_SMOOTH};
use crate::anim::frame::FrameScheduler;
use crate::anim::gate::GateHandle;
use crate::anim::set_css_var;
use crate::config;

/// Below this scroll progress the hero counts as "at rest" and hover tilt
/// is allowed; at or above it the scroll animation owns the transforms.
pub const HOVER_CUTOFF: f64 = 0.02;

/// Scroll progress through the runway: 0 at the top of the page, 1 once the
/// section has fully scrolled past. Clamped.
pub fn scroll_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let scrollable = section_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (-section_top / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseVars {
    pub ry_deg: f64,
    pub rx_deg: f64,
    pub tz_px: f64,
    pub tx_pct: f64,
    pub scale: f64,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideOut {
    pub x_px: f64,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CtaExit {
    pub scale: f64,
    pub y_px: f64,
    pub opacity: f64,
}

/// Every animated value for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CinematicFrame {
    pub showcase: ShowcaseVars,
    pub pill: SlideOut,
    pub title: SlideOut,
    pub subtitle: SlideOut,
    pub ctas: CtaExit,
}

impl CinematicFrame {
    pub fn at(t: f64) -> Self {
        // Showcase: resting -> rotated, scaled down, pushed deep, offset
        // right. Its opacity fade starts later than the transform.
        let exit = progress(t, 0.0, 0.6, Some(&EASE_IN_APPLE));
        let fade = progress(t, 0.15, 0.55, Some(&EASE_IN_OUT_SMOOTH));
        let showcase = ShowcaseVars {
            ry_deg: lerp(0.0, 35.0, exit),
            rx_deg: lerp(0.0, -10.0, exit),
            tz_px: lerp(0.0, -800.0, exit),
            tx_pct: lerp(0.0, 20.0, exit),
            scale: lerp(1.0, 0.5, exit),
            opacity: lerp(1.0, 0.0, fade),
        };

        // Text column slides out to the left, top to bottom.
        let p = progress(t, 0.05, 0.35, Some(&EASE_IN_OUT_SMOOTH));
        let pill = SlideOut {
            x_px: lerp(0.0, -50.0, p),
            opacity: lerp(1.0, 0.0, p),
        };
        let p = progress(t, 0.1, 0.4, Some(&EASE_IN_OUT_SMOOTH));
        let title = SlideOut {
            x_px: lerp(0.0, -70.0, p),
            opacity: lerp(1.0, 0.0, p),
        };
        let p = progress(t, 0.15, 0.45, Some(&EASE_IN_OUT_SMOOTH));
        let subtitle = SlideOut {
            x_px: lerp(0.0, -70.0, p),
            opacity: lerp(1.0, 0.0, p),
        };
        let p = progress(t, 0.2, 0.5, Some(&EASE_IN_OUT_SMOOTH));
        let ctas = CtaExit {
            scale: lerp(1.0, 0.85, p),
            y_px: lerp(0.0, 20.0, p),
            opacity: lerp(1.0, 0.0, p),
        };

        Self {
            showcase,
            pill,
            title,
            subtitle,
            ctas,
        }
    }
}

#[derive(Clone)]
struct Targets {
    section: Option<HtmlElement>,
    showcase: Option<HtmlElement>,
    pill: Option<HtmlElement>,
    title: Option<HtmlElement>,
    subtitle: Option<HtmlElement>,
    ctas: Option<HtmlElement>,
}

impl Targets {
    fn query(document: &Document) -> Self {
        Self {
            section: find(document, "hero-section"),
            showcase: find(document, "hero-showcase"),
            pill: find(document, "hero-pill"),
            title: find(document, "hero-title"),
            subtitle: find(document, "hero-sub"),
            ctas: find(document, "hero-ctas"),
        }
    }
}

fn find(document: &Document, key: &str) -> Option<HtmlElement> {
    document
        .query_selector(&format!("[data-scroll=\"{key}\"]"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Owns the scroll listener for the hero cinematic and drives the gate.
pub struct ScrollCinematic {
    scheduler: FrameScheduler,
    on_scroll: Closure<dyn FnMut()>,
}

impl ScrollCinematic {
    /// Returns None on narrow viewports and in headless environments.
    pub fn mount(gate: GateHandle) -> Option<Self> {
        if config::is_narrow_viewport() {
            return None;
        }
        let window = web_sys::window()?;
        let document = window.document()?;
        let targets = Targets::query(&document);

        let scheduler = {
            let targets = targets.clone();
            let gate = gate.clone();
            FrameScheduler::new(move || apply_sample(&targets, &gate))
        };

        let on_scroll = {
            let scheduler = scheduler.clone();
            Closure::<dyn FnMut()>::new(move || scheduler.schedule())
        };
        let mut options = AddEventListenerOptions::new();
        options.passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                on_scroll.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        // Immediate first sample, then tell dependents where the gate
        // stands so they start consistent.
        apply_sample(&targets, &gate);
        gate.announce();

        Some(Self {
            scheduler,
            on_scroll,
        })
    }
}

impl Drop for ScrollCinematic {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.on_scroll.as_ref().unchecked_ref(),
            );
        }
        self.scheduler.cancel();
    }
}

fn apply_sample(targets: &Targets, gate: &GateHandle) {
    let section = match targets.section.as_ref() {
        Some(section) => section,
        None => return,
    };
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    // The rect is re-read per sample; sticky positioning moves it.
    let rect = section.get_bounding_client_rect();
    let t = scroll_progress(rect.top(), section.offset_height() as f64, viewport);
    let frame = CinematicFrame::at(t);

    if let Some(el) = targets.showcase.as_ref() {
        set_css_var(el, "--showcase-ry", &format!("{:.2}deg", frame.showcase.ry_deg));
        set_css_var(el, "--showcase-rx", &format!("{:.2}deg", frame.showcase.rx_deg));
        set_css_var(el, "--showcase-tz", &format!("{:.1}px", frame.showcase.tz_px));
        set_css_var(el, "--showcase-tx", &format!("{:.2}%", frame.showcase.tx_pct));
        set_css_var(el, "--showcase-scale", &format!("{:.4}", frame.showcase.scale));
        set_css_var(el, "--showcase-opacity", &format!("{:.4}", frame.showcase.opacity));
    }
    if let Some(el) = targets.pill.as_ref() {
        set_css_var(el, "--hero-pill-x", &format!("{:.1}px", frame.pill.x_px));
        set_css_var(el, "--hero-pill-opacity", &format!("{:.4}", frame.pill.opacity));
    }
    if let Some(el) = targets.title.as_ref() {
        set_css_var(el, "--hero-title-x", &format!("{:.1}px", frame.title.x_px));
        set_css_var(el, "--hero-title-opacity", &format!("{:.4}", frame.title.opacity));
    }
    if let Some(el) = targets.subtitle.as_ref() {
        set_css_var(el, "--hero-sub-x", &format!("{:.1}px", frame.subtitle.x_px));
        set_css_var(el, "--hero-sub-opacity", &format!("{:.4}", frame.subtitle.opacity));
    }
    if let Some(el) = targets.ctas.as_ref() {
        set_css_var(el, "--hero-ctas-scale", &format!("{:.4}", frame.ctas.scale));
        set_css_var(el, "--hero-ctas-y", &format!("{:.1}px", frame.ctas.y_px));
        set_css_var(el, "--hero-ctas-opacity", &format!("{:.4}", frame.ctas.opacity));
    }

    // Hover tilt hands off to the scroll animation almost immediately on
    // scroll-down and re-arms when the user returns to the top.
    gate.set(t < HOVER_CUTOFF);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::easing::EASE_IN_APPLE;

    #[test]
    fn scroll_progress_clamps() {
        // 300vh runway on a 900px viewport: 2700px tall, 1800px scrollable.
        assert_eq!(scroll_progress(0.0, 2700.0, 900.0), 0.0);
        assert_eq!(scroll_progress(100.0, 2700.0, 900.0), 0.0);
        assert_eq!(scroll_progress(-900.0, 2700.0, 900.0), 0.5);
        assert_eq!(scroll_progress(-1800.0, 2700.0, 900.0), 1.0);
        assert_eq!(scroll_progress(-5000.0, 2700.0, 900.0), 1.0);
    }

    #[test]
    fn scroll_progress_degenerate_runway_is_at_rest() {
        assert_eq!(scroll_progress(-100.0, 800.0, 900.0), 0.0);
        assert_eq!(scroll_progress(-100.0, 900.0, 900.0), 0.0);
    }

    #[test]
    fn frame_at_rest_is_neutral() {
        // Neutral within solver tolerance: the bisection solver lands a
        // hair off the exact endpoints.
        let frame = CinematicFrame::at(0.0);
        assert!(frame.showcase.ry_deg.abs() < 1e-4);
        assert!(frame.showcase.rx_deg.abs() < 1e-4);
        assert!(frame.showcase.tz_px.abs() < 1e-2);
        assert!((frame.showcase.scale - 1.0).abs() < 1e-4);
        assert!((frame.showcase.opacity - 1.0).abs() < 1e-4);
        assert!(frame.pill.x_px.abs() < 1e-4);
        assert!((frame.ctas.opacity - 1.0).abs() < 1e-4);
    }

    #[test]
    fn frame_fully_scrolled_is_exited() {
        let frame = CinematicFrame::at(1.0);
        assert!((frame.showcase.ry_deg - 35.0).abs() < 1e-3);
        assert!((frame.showcase.rx_deg + 10.0).abs() < 1e-3);
        assert!((frame.showcase.tz_px + 800.0).abs() < 1.0);
        assert!((frame.showcase.scale - 0.5).abs() < 1e-3);
        assert!(frame.showcase.opacity.abs() < 1e-3);
        assert!((frame.title.x_px + 70.0).abs() < 1e-2);
        assert!((frame.ctas.scale - 0.85).abs() < 1e-3);
    }

    #[test]
    fn showcase_rotation_at_mid_window_is_eased_below_linear() {
        // t = 0.3 sits halfway through the [0, 0.6] exit window, so the
        // rotation is 35deg scaled by the eased midpoint: below the linear
        // 17.5deg because the ease-in preset is slow-starting.
        let frame = CinematicFrame::at(0.3);
        let expected = 35.0 * EASE_IN_APPLE.eval(0.5);
        assert!((frame.showcase.ry_deg - expected).abs() < 1e-9);
        assert!(frame.showcase.ry_deg > 0.0);
        assert!(frame.showcase.ry_deg < 17.5);
    }

    #[test]
    fn opacity_fade_lags_the_transform() {
        // At t = 0.1 the showcase is already moving but not yet fading.
        let frame = CinematicFrame::at(0.1);
        assert!(frame.showcase.ry_deg > 0.1);
        assert!((frame.showcase.opacity - 1.0).abs() < 1e-4);
    }

    #[test]
    fn stagger_order_pill_before_ctas() {
        // Windows are staggered: at t = 0.2 the pill is well on its way out
        // while the CTA group has barely started.
        let frame = CinematicFrame::at(0.2);
        assert!(frame.pill.opacity < frame.ctas.opacity);
    }

    #[test]
    fn gate_flips_at_cutoff_and_is_reentrant() {
        use std::cell::Cell;
        use std::rc::Rc;

        // The controller writes `t < HOVER_CUTOFF` on every sample; the
        // gate's edge triggering keeps that idempotent. Scrolling down,
        // back up, down, and up again yields exactly four transitions.
        let gate = GateHandle::new();
        let transitions = Rc::new(Cell::new(0u32));
        let seen = transitions.clone();
        gate.subscribe(move |_| seen.set(seen.get() + 1));

        for t in [0.0, 0.01, 0.03, 0.5, 0.019, 0.6, 0.9, 0.0] {
            gate.set(t < HOVER_CUTOFF);
        }
        assert_eq!(transitions.get(), 4);
        assert!(gate.is_enabled());
    }
}
