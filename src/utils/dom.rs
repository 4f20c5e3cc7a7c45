//! Thin wrappers over `web_sys` for the handful of document operations the
//! site needs. Every helper degrades to a no-op when the window or the
//! target element is missing, so callers never branch on platform state.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use super::geometry::{Rect, Viewport};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector`; empty when the document is missing or
/// nothing matches.
pub fn query_all(selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Some(doc) = document() {
        if let Ok(list) = doc.query_selector_all(selector) {
            for ix in 0..list.length() {
                if let Some(el) = list.item(ix).and_then(|n| n.dyn_into::<Element>().ok()) {
                    out.push(el);
                }
            }
        }
    }
    out
}

pub fn element_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        top: r.top(),
        right: r.right(),
        bottom: r.bottom(),
        left: r.left(),
    }
}

/// Live viewport size, preferring `innerWidth`/`innerHeight` with the
/// document element's client box as fallback.
pub fn viewport() -> Viewport {
    let doc_el = document().and_then(|d| d.document_element());
    let width = window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .filter(|w| *w > 0.0)
        .or_else(|| doc_el.as_ref().map(|e| e.client_width() as f64))
        .unwrap_or(0.0);
    let height = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .filter(|h| *h > 0.0)
        .or_else(|| doc_el.as_ref().map(|e| e.client_height() as f64))
        .unwrap_or(0.0);
    Viewport { width, height }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smooth-scroll the window to the very top.
pub fn smooth_scroll_to_top() {
    if let Some(win) = window() {
        let mut opts = ScrollToOptions::new();
        opts.top(0.0).behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Jump to the top without animating, for page mounts.
pub fn scroll_to_top_instant() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn smooth_scroll_into_view(el: &Element, block: ScrollLogicalPosition) {
    let mut opts = ScrollIntoViewOptions::new();
    opts.behavior(ScrollBehavior::Smooth).block(block);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Smooth-scroll to the element with `id`, if it exists.
pub fn smooth_scroll_to_id(id: &str) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
        smooth_scroll_into_view(&el, ScrollLogicalPosition::Start);
    }
}

/// Freeze or restore body scrolling while the mobile drawer is open.
pub fn lock_body_scroll(lock: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let style = body.style();
        let result = if lock {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            log::warn!("failed to toggle body overflow");
        }
    }
}

/// Set an inline style property, logging on failure instead of surfacing it.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if html.style().set_property(property, value).is_err() {
            log::warn!("failed to set style {property}");
        }
    }
}
