//! Fire-and-forget product analytics over the Mixpanel browser global.
//!
//! The Mixpanel script loads from a CDN tag in index.html; when it is
//! blocked or the token is absent, every call here is a silent no-op. The
//! page must never fail because analytics can't run.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};

// One-shot latch: init() may be called from any mount path.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

fn mixpanel_global() -> Option<JsValue> {
    let window = web_sys::window()?;
    let global = js_sys::Reflect::get(&window, &JsValue::from_str("mixpanel")).ok()?;
    if global.is_undefined() || global.is_null() {
        None
    } else {
        Some(global)
    }
}

fn call_mixpanel(method: &str, args: &[JsValue]) -> bool {
    let global = match mixpanel_global() {
        Some(global) => global,
        None => return false,
    };
    let function = match js_sys::Reflect::get(&global, &JsValue::from_str(method)) {
        Ok(function) => function,
        Err(_) => return false,
    };
    let function = match function.dyn_ref::<js_sys::Function>() {
        Some(function) => function,
        None => return false,
    };
    let result = match args {
        [] => function.call0(&global),
        [a] => function.call1(&global, a),
        [a, b] => function.call2(&global, a, b),
        _ => return false,
    };
    result.is_ok()
}

fn to_js(value: &Value) -> Option<JsValue> {
    js_sys::JSON::parse(&value.to_string()).ok()
}

/// Idempotent. A missing token or blocked script leaves analytics dark.
pub fn init() {
    if INITIALIZED.load(Ordering::Relaxed) {
        return;
    }
    let token = match crate::config::get_mixpanel_token() {
        Some(token) => token,
        None => {
            log::info!("analytics disabled: no token configured");
            return;
        }
    };
    let options = json!({
        "track_pageview": true,
        "persistence": "localStorage",
    });
    let options = match to_js(&options) {
        Some(options) => options,
        None => return,
    };
    if call_mixpanel("init", &[JsValue::from_str(token), options]) {
        INITIALIZED.store(true, Ordering::Relaxed);
    } else {
        log::warn!("analytics disabled: mixpanel script not loaded");
    }
}

/// No-op before init().
pub fn track(name: &str) {
    if !INITIALIZED.load(Ordering::Relaxed) {
        return;
    }
    call_mixpanel("track", &[JsValue::from_str(name)]);
}

pub fn track_with_props(name: &str, properties: Value) {
    if !INITIALIZED.load(Ordering::Relaxed) {
        return;
    }
    let props = match to_js(&properties) {
        Some(props) => props,
        None => return,
    };
    call_mixpanel("track", &[JsValue::from_str(name), props]);
}
