use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animations::{CountUp, COUNT_TICK_MS};

/// The count starts once at least half of the element is on screen.
const VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Final value the counter lands on.
    pub target: u32,
    pub label: AttrValue,
    /// Rendered immediately after the number, e.g. `"+"` or `"%"`.
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// A number that counts up from zero the first time it scrolls into view.
/// The run fires once per mount; scrolling away and back does not restart
/// it.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state_eq(|| 0u32);
    let node = use_node_ref();

    {
        let value = value.clone();
        let node = node.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let started = Rc::new(Cell::new(false));
                let observer_cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<IntersectionObserverEntry>()
                                .map_or(false, |e| e.is_intersecting())
                        });
                        if intersecting && !started.get() {
                            started.set(true);
                            observer.disconnect();
                            let value = value.clone();
                            spawn_local(async move {
                                let mut tween = CountUp::new(target);
                                value.set(tween.display());
                                loop {
                                    TimeoutFuture::new(COUNT_TICK_MS).await;
                                    let more = tween.tick();
                                    value.set(tween.display());
                                    if !more {
                                        break;
                                    }
                                }
                            });
                        }
                    },
                );

                let mut options = IntersectionObserverInit::new();
                options.threshold(&JsValue::from(VISIBILITY_THRESHOLD));
                let observer = match IntersectionObserver::new_with_options(
                    observer_cb.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => {
                        if let Some(el) = node.cast::<Element>() {
                            observer.observe(&el);
                        }
                        Some(observer)
                    }
                    Err(err) => {
                        log::warn!("intersection observer unavailable: {err:?}");
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(observer_cb);
                }
            },
            (),
        );
    }

    html! {
        <div class="stat" ref={node}>
            <span class="stat-number">
                {*value}
                <span class="stat-suffix">{&props.suffix}</span>
            </span>
            <span class="stat-label">{&props.label}</span>
        </div>
    }
}
