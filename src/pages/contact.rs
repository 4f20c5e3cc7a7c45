use yew::prelude::*;

use crate::components::ContactForm;
use crate::config;
use crate::pages::page_setup;
use crate::utils::format::format_phone_number;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_effect_with_deps(move |_| page_setup(), ());

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <div class="container">
                    <h1 class="fade-in">{"Start a conversation"}</h1>
                    <p class="page-hero-sub fade-in delay-1">
                        {"Tell us what you are trying to build. We reply to every message within one \
                          business day."}
                    </p>
                </div>
            </section>

            <section class="section contact-body">
                <div class="container contact-grid">
                    <div class="contact-info">
                        <div class="info-row fade-in delay-1">
                            <i class="fas fa-location-dot"></i>
                            <div>
                                <h3>{"Visit"}</h3>
                                <p>{config::OFFICE_ADDRESS}</p>
                            </div>
                        </div>
                        <div class="info-row fade-in delay-2">
                            <i class="fas fa-envelope"></i>
                            <div>
                                <h3>{"Email"}</h3>
                                <p>
                                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                                        {config::CONTACT_EMAIL}
                                    </a>
                                </p>
                            </div>
                        </div>
                        <div class="info-row fade-in delay-3">
                            <i class="fas fa-phone"></i>
                            <div>
                                <h3>{"Call"}</h3>
                                <p>{format_phone_number(config::CONTACT_PHONE)}</p>
                            </div>
                        </div>
                        <div class="info-row fade-in delay-4">
                            <i class="fas fa-clock"></i>
                            <div>
                                <h3>{"Hours"}</h3>
                                <p>{"Monday to Friday, 9am to 6pm Pacific"}</p>
                            </div>
                        </div>
                    </div>
                    <div class="contact-form-panel fade-in delay-2">
                        <ContactForm />
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.6fr;
                    gap: 3rem;
                    align-items: start;
                }
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .info-row {
                    display: flex;
                    gap: 1rem;
                }
                .info-row i {
                    font-size: 1.3rem;
                    color: #2dd4bf;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 10px;
                    background: rgba(45, 212, 191, 0.1);
                    flex-shrink: 0;
                }
                .info-row h3 {
                    margin-bottom: 0.25rem;
                    font-size: 1.05rem;
                }
                .info-row p {
                    margin: 0;
                    color: #9aa3af;
                }
                .contact-form-panel {
                    padding: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    background: #11141a;
                }
                @media (max-width: 860px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
