//! One-shot scroll reveal for elements tagged `fade-in` / `delay-N`.
//!
//! `RevealEngine` holds the pure bookkeeping (which element reveals when)
//! and `ScrollReveal` wires it to the document: it seeds the pre-reveal
//! styles, sweeps on mount, and re-sweeps behind a debounced scroll
//! listener. Once an element has revealed it stays revealed no matter
//! where the user scrolls next.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::utils::dom;
use crate::utils::geometry::rect_in_viewport;
use crate::utils::timing::Debounce;

/// Everything the reveal pass watches, including untagged `fade-in`.
pub const REVEAL_SELECTOR: &str =
    ".fade-in, .delay-1, .delay-2, .delay-3, .delay-4, .delay-5, .delay-6, .delay-7";

/// Elements start revealing this many pixels before they fully enter the
/// viewport, so the fade is already underway when they land on screen.
pub const REVEAL_OFFSET_PX: f64 = 100.0;

/// Quiet period after the last scroll event before a sweep runs.
pub const SWEEP_DEBOUNCE_MS: u32 = 50;

/// Milliseconds of stagger per delay tier, indexed by tier number.
const TIER_DELAYS_MS: [u32; 8] = [0, 200, 400, 600, 800, 1000, 1200, 1400];

pub fn delay_for_tier(tier: u8) -> u32 {
    TIER_DELAYS_MS.get(tier as usize).copied().unwrap_or(0)
}

/// Delay tier from a space-separated class string. The lowest `delay-N`
/// present wins; untagged elements reveal immediately.
pub fn tier_from_classes(classes: &str) -> u8 {
    classes
        .split_whitespace()
        .filter_map(|c| c.strip_prefix("delay-"))
        .filter_map(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=7).contains(n))
        .min()
        .unwrap_or(0)
}

struct RevealItem<H> {
    handle: H,
    delay_ms: u32,
    revealed: bool,
}

/// Monotonic reveal bookkeeping over abstract handles. Generic so the
/// sweep logic tests against plain values instead of live elements.
pub struct RevealEngine<H> {
    items: Vec<RevealItem<H>>,
}

impl<H> RevealEngine<H> {
    pub fn new(items: impl IntoIterator<Item = (H, u32)>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|(handle, delay_ms)| RevealItem {
                    handle,
                    delay_ms,
                    revealed: false,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One pass: still-hidden items that `visible` reports in view are
    /// marked revealed, permanently, and handed back as `(index, delay)`.
    pub fn sweep(&mut self, visible: impl Fn(&H) -> bool) -> Vec<(usize, u32)> {
        let mut due = Vec::new();
        for (ix, item) in self.items.iter_mut().enumerate() {
            if !item.revealed && visible(&item.handle) {
                item.revealed = true;
                due.push((ix, item.delay_ms));
            }
        }
        due
    }

    pub fn handle(&self, ix: usize) -> Option<&H> {
        self.items.get(ix).map(|item| &item.handle)
    }
}

/// Live document driver for `RevealEngine`. Dropping it removes the
/// scroll listener and cancels any pending sweep. The engine itself is
/// owned by the debounced sweep closure.
pub struct ScrollReveal {
    debounce: Rc<RefCell<Debounce>>,
    scroll_cb: Closure<dyn FnMut()>,
}

impl ScrollReveal {
    /// Collects the tagged elements currently in the document, seeds their
    /// hidden state, runs an initial sweep for anything already on screen,
    /// and starts listening for scrolls. `None` when the page has nothing
    /// to reveal.
    pub fn mount() -> Option<Self> {
        let elements = dom::query_all(REVEAL_SELECTOR);
        if elements.is_empty() {
            return None;
        }
        for el in &elements {
            dom::set_style(el, "opacity", "0");
            dom::set_style(
                el,
                "transition",
                "opacity 0.6s ease-out, transform 0.6s ease-out",
            );
        }
        let engine = Rc::new(RefCell::new(RevealEngine::new(elements.into_iter().map(
            |el| {
                let delay_ms = delay_for_tier(tier_from_classes(&el.class_name()));
                (el, delay_ms)
            },
        ))));
        sweep_now(&engine);

        let debounce: Rc<RefCell<Debounce>> = Rc::new(RefCell::new(Debounce::new(
            SWEEP_DEBOUNCE_MS,
            {
                let engine = Rc::clone(&engine);
                move |_| sweep_now(&engine)
            },
        )));
        let scroll_cb = Closure::<dyn FnMut()>::new({
            let debounce = Rc::clone(&debounce);
            move || debounce.borrow_mut().call(())
        });
        if let Some(win) = dom::window() {
            let _ =
                win.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
        }
        Some(Self {
            debounce,
            scroll_cb,
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        if let Some(win) = dom::window() {
            let _ = win
                .remove_event_listener_with_callback("scroll", self.scroll_cb.as_ref().unchecked_ref());
        }
        self.debounce.borrow_mut().cancel();
    }
}

fn sweep_now(engine: &Rc<RefCell<RevealEngine<Element>>>) {
    let viewport = dom::viewport();
    let due = engine.borrow_mut().sweep(|el| {
        rect_in_viewport(dom::element_rect(el), viewport, REVEAL_OFFSET_PX)
    });
    for (ix, delay_ms) in due {
        let Some(el) = engine.borrow().handle(ix).cloned() else {
            continue;
        };
        if delay_ms == 0 {
            reveal(&el);
        } else {
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                reveal(&el);
            });
        }
    }
}

fn reveal(el: &Element) {
    dom::set_style(el, "opacity", "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parsing_reads_the_lowest_delay_class() {
        assert_eq!(tier_from_classes("fade-in"), 0);
        assert_eq!(tier_from_classes("card delay-3"), 3);
        assert_eq!(tier_from_classes("delay-5 delay-2"), 2);
        assert_eq!(tier_from_classes("delay-9 delay-0 delayed"), 0);
        assert_eq!(tier_from_classes(""), 0);
    }

    #[test]
    fn tiers_map_to_the_stagger_table() {
        assert_eq!(delay_for_tier(0), 0);
        assert_eq!(delay_for_tier(1), 200);
        assert_eq!(delay_for_tier(3), 600);
        assert_eq!(delay_for_tier(7), 1400);
        assert_eq!(delay_for_tier(12), 0);
    }

    #[test]
    fn sweep_reports_only_visible_hidden_items() {
        let mut engine = RevealEngine::new([("a", 0), ("b", 200), ("c", 400)]);
        let due = engine.sweep(|h| *h != "c");
        assert_eq!(due, vec![(0, 0), (1, 200)]);
    }

    #[test]
    fn revealed_items_never_come_back() {
        let mut engine = RevealEngine::new([("a", 0), ("b", 200)]);
        assert_eq!(engine.sweep(|h| *h == "a"), vec![(0, 0)]);
        // "a" scrolled back out of view; it must stay revealed and "b"
        // reveals when it shows up.
        assert_eq!(engine.sweep(|h| *h == "b"), vec![(1, 200)]);
        assert!(engine.sweep(|_| true).is_empty());
    }

    #[test]
    fn empty_engine_sweeps_to_nothing() {
        let mut engine: RevealEngine<&str> = RevealEngine::new([]);
        assert!(engine.is_empty());
        assert!(engine.sweep(|_| true).is_empty());
    }
}
