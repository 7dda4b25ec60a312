use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::SiteFooter;
use crate::config;
use crate::seo;
use crate::Route;

#[function_component(Privacy)]
pub fn privacy() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
                if let Some(document) = window.document() {
                    seo::set_page_meta(
                        &document,
                        "Privacy Policy | Zcomments",
                        "Zcomments privacy policy — how we collect, use, and protect your data when you use the Zcomments browser extension for Zillow.",
                        &format!("{}/privacy", config::SITE_URL),
                    );
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-page">
            <nav class="legal-nav" aria-label="Privacy page navigation">
                <Link<Route> to={Route::Home} classes="legal-nav-logo">
                    <img src="/static/text-logo.png" alt="Zcomments" width="140" height="32" />
                </Link<Route>>
                <Link<Route> to={Route::Home} classes="legal-nav-back">
                    {"← Back to home"}
                </Link<Route>>
            </nav>

            <main class="legal-wrapper">
                <h1 class="legal-title">{"Privacy Policy"}</h1>
                <p class="legal-updated">{"Last updated: February 22, 2026"}</p>

                <section class="legal-section">
                    <h2>{"Introduction"}</h2>
                    <p>
                        {"Zcomments (\"we\", \"our\", or \"us\") is a browser extension that enables users to leave and view comments on Zillow property listings. We are committed to protecting your privacy and being transparent about our data practices."}
                    </p>
                </section>

                <section class="legal-section">
                    <h2>{"Information We Collect"}</h2>
                    <p>
                        <strong>{"Account Information: "}</strong>
                        {"When you create an account, we collect your email address and display name to identify you within the community."}
                    </p>
                    <p>
                        <strong>{"Comments & Content: "}</strong>
                        {"We store comments, replies, and any images you upload to share with other users on property listings."}
                    </p>
                    <p>
                        <strong>{"Usage Data: "}</strong>
                        {"We collect basic analytics such as page views and session information to understand how users interact with the extension."}
                    </p>
                    <p>
                        <strong>{"Technical Data: "}</strong>
                        {"We may collect your browser type, extension version, and general interaction patterns to maintain and improve our service."}
                    </p>
                </section>

                <section class="legal-section">
                    <h2>{"How We Use Your Information"}</h2>
                    <p>
                        {"We use your information to provide and improve our services, display your comments to other users, and maintain the security of our platform. We do not sell your personal information to third parties."}
                    </p>
                </section>

                <section class="legal-section">
                    <h2>{"Data Sharing"}</h2>
                    <p>
                        {"We do not sell, trade, or rent your personal information. We may share data only in the following limited circumstances:"}
                    </p>
                    <ul>
                        <li>{"With service providers who help us operate our platform (hosting, storage)"}</li>
                        <li>{"When required by law or to respond to legal process"}</li>
                        <li>{"To protect our rights, privacy, safety, or property"}</li>
                    </ul>
                </section>

                <section class="legal-section">
                    <h2>{"Data Storage & Security"}</h2>
                    <p>
                        {"Your data is stored securely on our servers. We implement industry-standard security measures to protect your information from unauthorized access, alteration, or destruction."}
                    </p>
                </section>

                <section class="legal-section">
                    <h2>{"Your Rights"}</h2>
                    <p>{"You have the right to:"}</p>
                    <ul>
                        <li>{"Request to view, edit, or delete your personal data at any time"}</li>
                        <li>{"Delete your comments individually through the extension"}</li>
                        <li>{"Request full account deletion by contacting us"}</li>
                        <li>{"Opt out of non-essential analytics"}</li>
                    </ul>
                </section>

                <section class="legal-section">
                    <h2>{"Cookies & Local Storage"}</h2>
                    <p>
                        {"Zcomments uses browser local storage to maintain your login session, save your theme preference (light or dark mode), and store anonymous session and visitor identifiers for analytics. We do not use tracking cookies from third-party advertisers."}
                    </p>
                </section>

                <section class="legal-section">
                    <h2>{"Third-Party Services"}</h2>
                    <p>
                        {"This extension operates on Zillow.com but is not affiliated with, endorsed by, or connected to Zillow Group, Inc. We use Google for optional sign-in authentication and third-party cloud storage for image uploads. These services have their own privacy policies."}
                    </p>
                </section>

                <section class="legal-section">
                    <h2>{"Children's Privacy"}</h2>
                    <p>
                        {"Zcomments is not directed at children under the age of 13. We do not knowingly collect personal information from children. If you believe a child has provided us with personal data, please contact us and we will delete it promptly."}
                    </p>
                </section>

                <section class="legal-section">
                    <h2>{"Changes to This Policy"}</h2>
                    <p>
                        {"We may update this privacy policy from time to time. We will notify users of any material changes through the extension. Continued use of Zcomments after changes constitutes acceptance of the updated policy."}
                    </p>
                </section>

                <section class="legal-section">
                    <h2>{"Contact Us"}</h2>
                    <p>
                        {"If you have questions about this privacy policy or our data practices, please contact us at "}
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="legal-link">
                            {config::CONTACT_EMAIL}
                        </a>
                        {"."}
                    </p>
                </section>
            </main>

            <SiteFooter />
        </div>
    }
}
