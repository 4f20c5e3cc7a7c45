//! Client-side app for the Vantora Digital marketing site.
//!
//! Pages are routed entirely in the browser; the interactive behavior
//! (scroll reveals, counters, the FAQ accordion, form validation) lives
//! in `animations` and `components`, with the pure rules under `utils`
//! where native tests can reach them.

pub mod animations;
pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use components::{BackToTop, Footer, NavBar};
use pages::{About, Contact, Faq, Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Faq => html! { <Faq /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! {
            <div class="container" style="padding: 10rem 1.5rem; text-align: center;">
                <h1>{"404"}</h1>
                <p>{"That page does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-outline">{"Back home"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <NavBar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <BackToTop />
            <Footer />
        </BrowserRouter>
    }
}

/// Initializes logging and mounts the app. Called from the binary.
pub fn run() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("{} starting", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
