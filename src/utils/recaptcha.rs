//! Bridge to the `grecaptcha` global the challenge script installs.
//!
//! All lookups go through `Reflect` so a page without the script behaves
//! as if the widget simply is not there.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

fn handle() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("grecaptcha")).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn call_method(target: &JsValue, name: &str) -> Option<JsValue> {
    let function = Reflect::get(target, &JsValue::from_str(name)).ok()?;
    let function: Function = function.dyn_into().ok()?;
    function.call0(target).ok()
}

/// Whether the page loaded the widget at all.
pub fn is_present() -> bool {
    handle().is_some()
}

/// The current response token. Empty or absent means unsolved.
pub fn response() -> Option<String> {
    call_method(&handle()?, "getResponse").and_then(|v| v.as_string())
}

/// Reset the widget after a successful submission.
pub fn reset() {
    if let Some(widget) = handle() {
        if call_method(&widget, "reset").is_none() {
            log::warn!("challenge widget reset failed");
        }
    }
}
