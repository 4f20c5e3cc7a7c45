use yew::prelude::*;

use crate::components::{ServiceCard, StatCounter};
use crate::pages::page_setup;

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with_deps(move |_| page_setup(), ());

    html! {
        <div class="about-page">
            <section class="page-hero">
                <div class="container">
                    <h1 class="fade-in">{"A small studio with outsized output"}</h1>
                    <p class="page-hero-sub fade-in delay-1">
                        {"Vantora started in 2014 as two engineers and a borrowed desk. Twelve years later \
                          we are forty specialists shipping products for companies on four continents."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container story-grid">
                    <div class="story-text fade-in">
                        <h2>{"Why teams pick us"}</h2>
                        <p>
                            {"Most agencies optimize for the pitch. We optimize for the month after \
                              launch, when the dashboards start telling the truth. Every engagement is \
                              staffed with the people who actually do the work, and every deliverable \
                              is something your team can run without us."}
                        </p>
                        <p>
                            {"That bias shows up in the small things: weekly working sessions instead \
                              of status decks, source the client owns from day one, and a hard rule \
                              against shipping anything we would not maintain ourselves."}
                        </p>
                    </div>
                    <div class="story-badge fade-in delay-2">
                        <div class="float-badge floating">
                            <i class="fas fa-rocket"></i>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section values">
                <div class="container">
                    <h2 class="section-title fade-in">{"What we value"}</h2>
                    <div class="services-grid">
                        <ServiceCard
                            class={classes!("fade-in", "delay-1")}
                            icon="fa-handshake"
                            title="Candor"
                            description="If a feature is a bad idea we say so before you pay for it, not after."
                        />
                        <ServiceCard
                            class={classes!("fade-in", "delay-2")}
                            icon="fa-gauge-high"
                            title="Momentum"
                            description="Something real ships every week of an engagement, starting with the first."
                        />
                        <ServiceCard
                            class={classes!("fade-in", "delay-3")}
                            icon="fa-key"
                            title="Ownership"
                            description="You keep the keys. Code, content and accounts live in your name from day one."
                        />
                    </div>
                </div>
            </section>

            <section class="section stats-band">
                <div class="container stats-grid">
                    <StatCounter target={180} suffix="+" label="Projects shipped" />
                    <StatCounter target={12} label="Years in business" />
                    <StatCounter target={96} suffix="%" label="Client retention" />
                    <StatCounter target={40} label="Specialists" />
                </div>
            </section>

            <style>
                {r#"
                .page-hero {
                    padding: 9rem 0 3rem 0;
                }
                .page-hero h1 {
                    font-size: clamp(2rem, 5vw, 3rem);
                }
                .page-hero-sub {
                    color: #9aa3af;
                    max-width: 640px;
                    font-size: 1.1rem;
                }
                .story-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .story-text p {
                    color: #9aa3af;
                }
                .story-badge {
                    display: flex;
                    justify-content: center;
                }
                .float-badge {
                    width: 140px;
                    height: 140px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                    color: #2dd4bf;
                    border-radius: 28px;
                    background: #151922;
                    border: 1px solid rgba(45, 212, 191, 0.3);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                }
                @keyframes float {
                    0% { transform: translateY(0); }
                    50% { transform: translateY(-12px); }
                    100% { transform: translateY(0); }
                }
                .floating {
                    animation: float 3s ease-in-out infinite;
                }
                .stats-band {
                    background: #11141a;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-number {
                    display: block;
                    font-size: 2.6rem;
                    font-weight: 800;
                    color: #2dd4bf;
                }
                .stat-label {
                    color: #9aa3af;
                }
                @media (max-width: 768px) {
                    .story-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
