use yew::prelude::*;
use yew_router::prelude::Link;

use crate::config;
use crate::utils::format::format_phone_number;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-col">
                    <div class="footer-brand">
                        <i class="fas fa-cube"></i>
                        <span>{config::SITE_NAME}</span>
                    </div>
                    <p>{"A product studio for companies that want their next launch to matter."}</p>
                </div>
                <div class="footer-col">
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-col">
                    <h4>{"Get in touch"}</h4>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    <span>{format_phone_number(config::CONTACT_PHONE)}</span>
                    <span>{config::OFFICE_ADDRESS}</span>
                </div>
            </div>
            <div class="footer-legal">
                <span>{format!("© 2026 {}. All rights reserved.", config::SITE_NAME)}</span>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0b0d11;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    padding: 4rem 1.5rem 2rem 1.5rem;
                }
                .footer-inner {
                    max-width: 1140px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    font-size: 1.2rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .footer-brand i {
                    color: #2dd4bf;
                }
                .footer-col {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: #9aa3af;
                }
                .footer-col h4 {
                    color: #e7e9ec;
                    margin-bottom: 0.5rem;
                }
                .footer-col a {
                    color: #9aa3af;
                }
                .footer-col a:hover {
                    color: #2dd4bf;
                }
                .footer-legal {
                    max-width: 1140px;
                    margin: 3rem auto 0 auto;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .footer-inner {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
