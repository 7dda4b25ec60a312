use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::SiteFooter;
use crate::config;
use crate::seo;
use crate::Route;

struct TermsSection {
    title: &'static str,
    text: &'static str,
}

const SECTIONS: [TermsSection; 13] = [
    TermsSection {
        title: "1. Acceptance of Terms",
        text: "By installing, accessing, or using the Zcomments browser extension (\"Extension\"), you agree to be bound by these Terms of Service (\"Terms\"). If you do not agree to these Terms, do not use the Extension.",
    },
    TermsSection {
        title: "2. Description of Service",
        text: "Zcomments is a free browser extension that adds a community comment section to Zillow property listing pages. The Extension allows users to post comments, reply to other users, upload images, and vote on comments. Zcomments is not affiliated with, endorsed by, or connected to Zillow Group, Inc.",
    },
    TermsSection {
        title: "3. User Accounts",
        text: "To post comments or interact with content, you must create an account. You are responsible for maintaining the confidentiality of your account credentials and for all activity that occurs under your account. You agree to provide accurate information when creating your account and to update it as needed.",
    },
    TermsSection {
        title: "4. User Content",
        text: "You retain ownership of the content you post through the Extension. By posting content, you grant Zcomments a non-exclusive, worldwide, royalty-free license to display, distribute, and store your content as necessary to operate the service. You agree not to post content that is unlawful, defamatory, harassing, threatening, or hateful; infringes on the intellectual property rights of others; contains spam, advertising, or unsolicited promotional material; impersonates another person or entity; contains malware, viruses, or other harmful code; or violates the privacy of others or shares personal information without consent.",
    },
    TermsSection {
        title: "5. Content Moderation",
        text: "We reserve the right to remove any content that violates these Terms or that we determine, in our sole discretion, is harmful to the community. We may also suspend or terminate accounts that repeatedly violate these Terms.",
    },
    TermsSection {
        title: "6. Intellectual Property",
        text: "The Extension, including its code, design, logos, and branding, is the property of Zcomments and is protected by applicable intellectual property laws. You may not copy, modify, distribute, or reverse-engineer any part of the Extension without our prior written consent.",
    },
    TermsSection {
        title: "7. Disclaimer of Warranties",
        text: "The Extension is provided \"as is\" and \"as available\" without warranties of any kind, whether express or implied. We do not guarantee that the Extension will be uninterrupted, error-free, or compatible with all browser versions or operating systems.",
    },
    TermsSection {
        title: "8. Limitation of Liability",
        text: "To the fullest extent permitted by law, Zcomments shall not be liable for any indirect, incidental, special, consequential, or punitive damages arising out of or related to your use of the Extension. Our total liability for any claim shall not exceed the amount you paid to use the Extension (which is zero, as the Extension is free).",
    },
    TermsSection {
        title: "9. Third-Party Services",
        text: "The Extension operates on Zillow.com and may integrate with third-party services such as Google for authentication and cloud storage for image uploads. Your use of these third-party services is subject to their respective terms and privacy policies.",
    },
    TermsSection {
        title: "10. Termination",
        text: "We may suspend or terminate your access to the Extension at any time, with or without cause, and with or without notice. You may stop using the Extension at any time by uninstalling it from your browser.",
    },
    TermsSection {
        title: "11. Changes to Terms",
        text: "We may update these Terms from time to time. We will notify users of material changes through the Extension or our website. Your continued use of the Extension after changes are posted constitutes acceptance of the updated Terms.",
    },
    TermsSection {
        title: "12. Governing Law",
        text: "These Terms shall be governed by and construed in accordance with the laws of the United States, without regard to conflict of law principles.",
    },
    TermsSection {
        title: "13. Contact Us",
        text: "If you have questions about these Terms, please contact us at the address below.",
    },
];

#[function_component(Terms)]
pub fn terms() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
                if let Some(document) = window.document() {
                    seo::set_page_meta(
                        &document,
                        "Terms of Service | Zcomments",
                        "Zcomments terms of service — the rules and guidelines for using the Zcomments browser extension for Zillow.",
                        &format!("{}/terms", config::SITE_URL),
                    );
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-page">
            <nav class="legal-nav" aria-label="Terms page navigation">
                <Link<Route> to={Route::Home} classes="legal-nav-logo">
                    <img src="/static/text-logo.png" alt="Zcomments" width="140" height="32" />
                </Link<Route>>
                <Link<Route> to={Route::Home} classes="legal-nav-back">
                    {"← Back to home"}
                </Link<Route>>
            </nav>

            <main class="legal-wrapper">
                <h1 class="legal-title">{"Terms of Service"}</h1>
                <p class="legal-updated">{"Last updated: February 22, 2026"}</p>

                {
                    SECTIONS.iter().map(|section| html! {
                        <section class="legal-section" key={section.title}>
                            <h2>{section.title}</h2>
                            <p>{section.text}</p>
                        </section>
                    }).collect::<Html>()
                }

                <p class="legal-contact">
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="legal-link">
                        {config::CONTACT_EMAIL}
                    </a>
                </p>
            </main>

            <SiteFooter />
        </div>
    }
}
