use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::config;
use crate::utils::dom;
use crate::utils::timing::Throttle;
use crate::Route;

/// Scroll depth past which the header picks up its condensed style.
const SCROLLED_AT_PX: f64 = 50.0;

/// Header scroll checks run at most this often.
const SCROLL_THROTTLE_MS: u32 = 100;

/// Fixed site header: brand, page links, and the mobile drawer. The
/// hamburger swaps between bars and a cross, and body scrolling is locked
/// while the drawer is open.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                scrolled.set(dom::scroll_y() > SCROLLED_AT_PX);
                let throttle = Rc::new(Throttle::new(SCROLL_THROTTLE_MS, {
                    let scrolled = scrolled.clone();
                    move || scrolled.set(dom::scroll_y() > SCROLLED_AT_PX)
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*menu_open;
            menu_open.set(open);
            dom::lock_body_scroll(open);
        })
    };

    // Clicks on any drawer link bubble up here and close the drawer.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if *menu_open {
                menu_open.set(false);
                dom::lock_body_scroll(false);
            }
        })
    };

    html! {
        <>
            <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
                <div class="nav-inner">
                    <Link<Route> to={Route::Home} classes="brand">
                        <i class="fas fa-cube"></i>
                        <span>{config::SITE_NAME}</span>
                    </Link<Route>>
                    <nav
                        class={classes!("nav-links", menu_open.then_some("active"))}
                        onclick={close_menu}
                    >
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                        <Link<Route> to={Route::Faq} classes="nav-link">{"FAQ"}</Link<Route>>
                        <Link<Route> to={Route::Contact} classes="nav-link">{"Contact"}</Link<Route>>
                    </nav>
                    <button class="nav-toggle" onclick={toggle_menu} aria-label="Toggle navigation">
                        if *menu_open {
                            <i class="fas fa-times"></i>
                        } else {
                            <i class="fas fa-bars"></i>
                        }
                    </button>
                </div>
            </header>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(15, 17, 21, 0.75);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(15, 17, 21, 0.95);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                }
                .nav-inner {
                    max-width: 1140px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #e7e9ec;
                }
                .brand i {
                    color: #2dd4bf;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #9aa3af;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #e7e9ec;
                }
                .nav-toggle {
                    display: none;
                    background: none;
                    border: none;
                    color: #e7e9ec;
                    font-size: 1.4rem;
                    padding: 0.25rem 0.5rem;
                }
                @media (max-width: 768px) {
                    .nav-toggle {
                        display: block;
                    }
                    .nav-links {
                        position: fixed;
                        top: 0;
                        right: -100%;
                        width: min(70vw, 320px);
                        height: 100vh;
                        padding: 6rem 2rem;
                        flex-direction: column;
                        gap: 1.5rem;
                        background: #151922;
                        box-shadow: -10px 0 30px rgba(0, 0, 0, 0.5);
                        transition: right 0.3s ease;
                    }
                    .nav-links.active {
                        right: 0;
                    }
                }
                "#}
            </style>
        </>
    }
}
