//! Timer and document behavior that only exists in a browser. Everything
//! else is covered by the native unit tests next to each module.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use vantora_site::animations::ScrollReveal;
use vantora_site::components::ContactSubmission;
use vantora_site::utils::storage;
use vantora_site::utils::timing::{Debounce, Throttle};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn debounce_runs_once_with_the_last_argument() {
    let hits: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let mut debounce = Debounce::new(30, {
        let hits = Rc::clone(&hits);
        move |arg: u32| hits.borrow_mut().push(arg)
    });

    for n in 1..=4 {
        debounce.call(n);
    }
    TimeoutFuture::new(100).await;
    assert_eq!(*hits.borrow(), vec![4]);

    // A later burst schedules independently.
    debounce.call(9);
    TimeoutFuture::new(100).await;
    assert_eq!(*hits.borrow(), vec![4, 9]);
}

#[wasm_bindgen_test]
async fn cancelled_debounce_never_fires() {
    let hits: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let mut debounce = Debounce::new(30, {
        let hits = Rc::clone(&hits);
        move |arg: u32| hits.borrow_mut().push(arg)
    });

    debounce.call(7);
    debounce.cancel();
    TimeoutFuture::new(100).await;
    assert!(hits.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn throttle_fires_on_the_leading_edge_and_coalesces_the_rest() {
    let hits: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
    let throttle = Throttle::new(50, {
        let hits = Rc::clone(&hits);
        move || *hits.borrow_mut() += 1
    });

    throttle.call();
    throttle.call();
    throttle.call();
    // The first call runs synchronously.
    assert_eq!(*hits.borrow(), 1);

    TimeoutFuture::new(150).await;
    // The burst collapses into exactly one trailing run.
    assert_eq!(*hits.borrow(), 2);
}

#[wasm_bindgen_test]
fn storage_round_trips_json_values() {
    let key = "test_contact_draft";
    let draft = ContactSubmission {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        phone: "(415) 555-0144".into(),
        message: "hello".into(),
    };

    assert!(storage::local_set(key, &draft));
    assert_eq!(storage::local_get::<ContactSubmission>(key), Some(draft));

    storage::local_remove(key);
    assert_eq!(storage::local_get::<ContactSubmission>(key), None);
}

#[wasm_bindgen_test]
fn storage_ignores_unparseable_entries() {
    let key = "test_bad_entry";
    assert!(storage::local_set(key, &"just a string"));
    assert_eq!(storage::local_get::<ContactSubmission>(key), None);
    storage::local_remove(key);
}

fn make_tagged(classes: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_class_name(classes);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn opacity_of(el: &web_sys::Element) -> String {
    use wasm_bindgen::JsCast;
    el.dyn_ref::<web_sys::HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("opacity")
        .unwrap()
}

#[wasm_bindgen_test]
async fn reveal_shows_visible_elements_and_honors_delay_tiers() {
    let instant = make_tagged("fade-in");
    let delayed = make_tagged("fade-in delay-1");

    let reveal = ScrollReveal::mount().expect("tagged elements were present");

    // The untiered element reveals during the initial sweep; the tiered
    // one is still seeded hidden.
    assert_eq!(opacity_of(&instant), "1");
    assert_eq!(opacity_of(&delayed), "0");

    TimeoutFuture::new(350).await;
    assert_eq!(opacity_of(&delayed), "1");

    drop(reveal);
    instant.remove();
    delayed.remove();
}
