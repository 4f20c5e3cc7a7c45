use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::{ServiceCard, TypingText};
use crate::pages::page_setup;
use crate::utils::dom;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(move |_| page_setup(), ());

    // The CTA pulses once per hover; the class comes off when the
    // animation finishes so it can fire again.
    let pulsing = use_state_eq(|| false);
    let start_pulse = {
        let pulsing = pulsing.clone();
        Callback::from(move |_: MouseEvent| pulsing.set(true))
    };
    let end_pulse = {
        let pulsing = pulsing.clone();
        Callback::from(move |_: AnimationEvent| pulsing.set(false))
    };
    let scroll_to_services =
        Callback::from(|_: MouseEvent| dom::smooth_scroll_to_id("services"));

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-ornament parallax" data-speed="0.3"></div>
                <div class="hero-ornament hero-ornament-far parallax" data-speed="0.7"></div>
                <div class="container hero-inner">
                    <h1 class="fade-in">{"We build products people remember."}</h1>
                    <p class="hero-sub">
                        <TypingText text="Strategy, design and engineering under one roof." />
                    </p>
                    <button
                        class={classes!("btn", "btn-primary", pulsing.then_some("pulse"))}
                        onclick={scroll_to_services}
                        onmouseenter={start_pulse}
                        onanimationend={end_pulse}
                    >
                        {"See what we do"}
                    </button>
                </div>
            </section>

            <section id="services" class="section">
                <div class="container">
                    <h2 class="section-title fade-in">{"What we do"}</h2>
                    <p class="section-subtitle fade-in">
                        {"Four disciplines, one team, no handoffs between agencies."}
                    </p>
                    <div class="services-grid">
                        <ServiceCard
                            class={classes!("fade-in", "delay-1")}
                            icon="fa-compass-drafting"
                            title="Product Strategy"
                            description="Positioning, roadmaps and validation sprints that de-risk whatever you build next."
                        />
                        <ServiceCard
                            class={classes!("fade-in", "delay-2")}
                            icon="fa-code"
                            title="Web Engineering"
                            description="Fast, accessible sites and web apps on a stack your own team can maintain."
                        />
                        <ServiceCard
                            class={classes!("fade-in", "delay-3")}
                            icon="fa-pen-ruler"
                            title="Brand & Design"
                            description="Identity systems and interfaces that make the product feel inevitable."
                        />
                        <ServiceCard
                            class={classes!("fade-in", "delay-4")}
                            icon="fa-chart-line"
                            title="Growth"
                            description="Analytics, experiments and content engines that keep compounding after launch."
                        />
                    </div>
                </div>
            </section>

            <section class="section process">
                <div class="container">
                    <h2 class="section-title fade-in">{"How we work"}</h2>
                    <div class="process-grid">
                        <div class="process-step fade-in delay-1">
                            <span class="process-num">{"01"}</span>
                            <h3>{"Discover"}</h3>
                            <p>{"A one-week sprint to map the problem, the users and the bet worth making."}</p>
                        </div>
                        <div class="process-step fade-in delay-2">
                            <span class="process-num">{"02"}</span>
                            <h3>{"Design"}</h3>
                            <p>{"Prototypes in front of real users early, refined until the rough edges are gone."}</p>
                        </div>
                        <div class="process-step fade-in delay-3">
                            <span class="process-num">{"03"}</span>
                            <h3>{"Deliver"}</h3>
                            <p>{"Shipped, measured and handed over with everything your team needs to run it."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section cta-band">
                <div class="container cta-inner fade-in">
                    <h2>{"Have something ambitious in mind?"}</h2>
                    <Link<Route> to={Route::Contact} classes="btn btn-outline">
                        {"Start a conversation"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }
                .hero-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 720px;
                }
                .hero h1 {
                    font-size: clamp(2.4rem, 6vw, 4rem);
                    background: linear-gradient(45deg, #e7e9ec, #2dd4bf);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-sub {
                    min-height: 1.6em;
                    font-size: 1.25rem;
                    color: #9aa3af;
                    margin-bottom: 2rem;
                }
                .hero-ornament {
                    position: absolute;
                    top: 15%;
                    right: 8%;
                    width: 420px;
                    height: 420px;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(45, 212, 191, 0.18), transparent 70%);
                    pointer-events: none;
                }
                .hero-ornament-far {
                    top: 50%;
                    right: 30%;
                    width: 260px;
                    height: 260px;
                    background: radial-gradient(circle, rgba(14, 165, 233, 0.15), transparent 70%);
                }
                @keyframes pulse {
                    0% { transform: scale(1); }
                    50% { transform: scale(1.05); }
                    100% { transform: scale(1); }
                }
                .btn.pulse {
                    animation: pulse 0.6s ease-in-out;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    padding: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    border-radius: 12px;
                    background: #151922;
                }
                .service-icon {
                    font-size: 1.8rem;
                    color: #2dd4bf;
                    margin-bottom: 1rem;
                }
                .service-card p {
                    color: #9aa3af;
                    margin: 0;
                }
                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    margin-top: 2rem;
                }
                .process-num {
                    font-size: 2.5rem;
                    font-weight: 800;
                    color: rgba(45, 212, 191, 0.35);
                }
                .process-step p {
                    color: #9aa3af;
                }
                .cta-band {
                    background: #11141a;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                }
                .cta-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .cta-inner h2 {
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
