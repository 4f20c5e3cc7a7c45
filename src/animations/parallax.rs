//! Scroll-linked parallax for elements tagged `parallax`.
//!
//! Offsets are computed from the window scroll position and each
//! element's `data-speed`, then applied as a `translate3d` so the
//! compositor handles the movement.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::utils::dom;
use crate::utils::timing::Debounce;

pub const PARALLAX_SELECTOR: &str = ".parallax";

/// Short window; parallax tracks the scroll much tighter than the reveal.
pub const PARALLAX_DEBOUNCE_MS: u32 = 10;

const DEFAULT_SPEED: f64 = 0.5;

/// Parallax speed from a `data-speed` attribute value.
pub fn parse_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite())
        .unwrap_or(DEFAULT_SPEED)
}

/// Vertical offset for an element moving at `speed` when the page has
/// scrolled `scroll_y` pixels. Positive speed drifts the element up.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

/// Live driver: collects tagged elements once and repositions them behind
/// debounced scroll and resize listeners. Dropping it unhooks both.
pub struct Parallax {
    debounce: Rc<RefCell<Debounce>>,
    scroll_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut()>,
}

impl Parallax {
    pub fn mount() -> Option<Self> {
        let items: Rc<Vec<(Element, f64)>> = Rc::new(
            dom::query_all(PARALLAX_SELECTOR)
                .into_iter()
                .map(|el| {
                    let speed = parse_speed(el.get_attribute("data-speed").as_deref());
                    (el, speed)
                })
                .collect(),
        );
        if items.is_empty() {
            return None;
        }
        apply(&items);

        let debounce: Rc<RefCell<Debounce>> = Rc::new(RefCell::new(Debounce::new(
            PARALLAX_DEBOUNCE_MS,
            {
                let items = Rc::clone(&items);
                move |_| apply(&items)
            },
        )));
        let scroll_cb = listener(&debounce);
        let resize_cb = listener(&debounce);
        if let Some(win) = dom::window() {
            let _ =
                win.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            let _ =
                win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        }
        Some(Self {
            debounce,
            scroll_cb,
            resize_cb,
        })
    }
}

fn listener(debounce: &Rc<RefCell<Debounce>>) -> Closure<dyn FnMut()> {
    let debounce = Rc::clone(debounce);
    Closure::<dyn FnMut()>::new(move || debounce.borrow_mut().call(()))
}

fn apply(items: &[(Element, f64)]) {
    let scroll_y = dom::scroll_y();
    for (el, speed) in items {
        let offset = parallax_offset(scroll_y, *speed);
        dom::set_style(el, "transform", &format!("translate3d(0, {offset}px, 0)"));
    }
}

impl Drop for Parallax {
    fn drop(&mut self) {
        if let Some(win) = dom::window() {
            let _ = win
                .remove_event_listener_with_callback("scroll", self.scroll_cb.as_ref().unchecked_ref());
            let _ = win
                .remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
        }
        self.debounce.borrow_mut().cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_defaults_when_missing_or_malformed() {
        assert_eq!(parse_speed(None), 0.5);
        assert_eq!(parse_speed(Some("fast")), 0.5);
        assert_eq!(parse_speed(Some("")), 0.5);
        assert_eq!(parse_speed(Some("NaN")), 0.5);
    }

    #[test]
    fn explicit_speeds_are_honored() {
        assert_eq!(parse_speed(Some("0.3")), 0.3);
        assert_eq!(parse_speed(Some(" 1.25 ")), 1.25);
    }

    #[test]
    fn offset_scales_with_scroll_and_speed() {
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
        assert_eq!(parallax_offset(200.0, 0.5), -100.0);
        assert_eq!(parallax_offset(200.0, 1.0), -200.0);
        // Negative speeds drift the element with the scroll instead.
        assert_eq!(parallax_offset(200.0, -0.25), 50.0);
    }
}
