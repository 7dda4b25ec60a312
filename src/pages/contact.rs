use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::SiteFooter;
use crate::config;
use crate::seo;
use crate::Route;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
                if let Some(document) = window.document() {
                    seo::set_page_meta(
                        &document,
                        "Contact | Zcomments",
                        "Get in touch with the Zcomments team.",
                        &format!("{}/contact", config::SITE_URL),
                    );
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-page">
            <nav class="legal-nav" aria-label="Contact page navigation">
                <Link<Route> to={Route::Home} classes="legal-nav-logo">
                    <img src="/static/text-logo.png" alt="Zcomments" width="140" height="32" />
                </Link<Route>>
                <Link<Route> to={Route::Home} classes="legal-nav-back">
                    {"← Back to home"}
                </Link<Route>>
            </nav>

            <main class="legal-wrapper">
                <h1 class="legal-title">{"Contact"}</h1>
                <p class="legal-text">
                    {"Have a question, feedback, or just want to say hi? Reach out anytime."}
                </p>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="contact-email">
                    {config::CONTACT_EMAIL}
                </a>
            </main>

            <SiteFooter />
        </div>
    }
}
