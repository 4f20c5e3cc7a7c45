use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::dom;
use crate::utils::timing::Throttle;

/// The button appears once the page has scrolled past this depth.
const VISIBLE_AT_PX: f64 = 300.0;

const SCROLL_THROTTLE_MS: u32 = 100;

/// Floating button that smooth-scrolls back to the top of the page once
/// the user is deep enough for it to be useful.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(dom::scroll_y() > VISIBLE_AT_PX);
                let throttle = Rc::new(Throttle::new(SCROLL_THROTTLE_MS, {
                    let visible = visible.clone();
                    move || visible.set(dom::scroll_y() > VISIBLE_AT_PX)
                }));
                let scroll_cb = Closure::<dyn FnMut()>::new({
                    let throttle = Rc::clone(&throttle);
                    move || throttle.call()
                });
                if let Some(win) = dom::window() {
                    let _ = win.add_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(win) = dom::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            scroll_cb.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to_top());

    html! {
        <>
            <button
                class={classes!("back-to-top", visible.then_some("visible"))}
                {onclick}
                aria-label="Back to top"
            >
                <i class="fas fa-arrow-up"></i>
            </button>
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 90;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: linear-gradient(45deg, #2dd4bf, #0ea5e9);
                    color: #06211e;
                    font-size: 1.1rem;
                    opacity: 0;
                    transform: translateY(10px);
                    pointer-events: none;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .back-to-top.visible {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                .back-to-top:hover {
                    transform: translateY(-3px);
                }
                "#}
            </style>
        </>
    }
}
