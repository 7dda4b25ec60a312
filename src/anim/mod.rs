//! Scroll- and pointer-driven animation controllers for the landing page.

pub mod cinematic;
pub mod easing;
pub mod frame;
pub mod gate;
pub mod glow;
pub mod pointer;
pub mod reveal;
pub mod tilt;

use web_sys::HtmlElement;

/// All animated values travel to the stylesheet as CSS custom properties.
/// A failed write (detached element) is dropped, never fatal.
pub(crate) fn set_css_var(element: &HtmlElement, name: &str, value: &str) {
    let _ = element.style().set_property(name, value);
}
