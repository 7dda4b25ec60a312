use yew::prelude::*;

use crate::anim::cinematic::ScrollCinematic;
use crate::anim::gate::GateHandle;
use crate::anim::reveal::RevealObserver;
use crate::components::email_signup::EmailSignup;
use crate::components::footer::SiteFooter;
use crate::components::glow_button::GlowButton;
use crate::components::logos::{ChromeLogo, SafariLogo};
use crate::components::nav_cta::NavCtaLink;
use crate::components::showcase::Showcase;
use crate::components::svg_filters::SvgFilters;
use crate::config;
use crate::seo::{self, FaqEntry};

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "💬",
        title: "Comment on any listing",
        text: "Share your take on any home. From prices and conditions to neighborhood vibes, you can now leave comments directly on Zillow listings.",
    },
    Feature {
        icon: "👍",
        title: "Reply and vote",
        text: "Respond to other buyers, agents, and neighbors. Upvote the most helpful comments so the best insights rise to the top.",
    },
    Feature {
        icon: "🌐",
        title: "Chrome and Safari",
        text: "Install once and every Zillow listing automatically gets a comment section. No extra setup required.",
    },
    Feature {
        icon: "📎",
        title: "Attach photos",
        text: "Drag and drop images into your comments. Share screenshots of comparable properties or neighborhood photos.",
    },
    Feature {
        icon: "🔒",
        title: "Privacy first",
        text: "Zcomments only activates on Zillow pages. It never tracks your browsing, collects personal data, or modifies other websites.",
    },
    Feature {
        icon: "✨",
        title: "100% free",
        text: "No subscription, no paywall, no premium tier. Zcomments is free to use for everyone.",
    },
];

struct Step {
    title: &'static str,
    text: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Install the extension",
        text: "Download Zcomments from the Chrome Web Store or the App Store for Safari. It takes less than 10 seconds.",
    },
    Step {
        title: "Browse Zillow normally",
        text: "Visit any Zillow listing. Zcomments automatically injects a comment section into the page — you don't have to do anything extra.",
    },
    Step {
        title: "Join the conversation",
        text: "Read what other buyers, sellers, and locals are saying. Leave your own comments, reply to others, and vote on the best takes.",
    },
];

pub const FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "What is Zcomments?",
        answer: "Zcomments is a free browser extension that adds a comment section to every Zillow real estate listing. It lets you discuss home prices, neighborhoods, and what people really think about properties on the market.",
    },
    FaqEntry {
        question: "Is Zcomments free?",
        answer: "Yes, Zcomments is completely free. You can download it for Chrome from the Chrome Web Store or for Safari from the App Store at no cost.",
    },
    FaqEntry {
        question: "What browsers does Zcomments support?",
        answer: "Zcomments is available for Google Chrome and Apple Safari. It works on macOS, Windows, and any platform that supports these browsers.",
    },
    FaqEntry {
        question: "How does Zcomments work?",
        answer: "Once installed, Zcomments automatically adds a comment section to every Zillow listing page you visit. You can read what others are saying, leave your own comments, reply to others, and vote on the most helpful insights — all directly on the Zillow page.",
    },
    FaqEntry {
        question: "Is my data safe with Zcomments?",
        answer: "Zcomments only activates on Zillow listing pages. It does not track your browsing activity, collect personal data, or modify any other websites. Your comments are tied to your Zcomments account and are visible to other Zcomments users on the same listing.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let gate = use_memo(|_| GateHandle::new(), ());

    // Scroll to top and publish this route's metadata + structured data.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
                if let Some(document) = window.document() {
                    seo::set_page_meta(
                        &document,
                        "Zcomments — Comments on Zillow Listings | Real Estate Discussion",
                        "Zcomments adds a comment section to every Zillow listing. Discuss home prices, neighborhoods, and what people really think about properties. Free browser extension for Chrome and Safari.",
                        config::SITE_URL,
                    );
                    seo::inject_json_ld(&document, "software-application", &seo::software_app_schema());
                    seo::inject_json_ld(&document, "organization", &seo::organization_schema());
                    seo::inject_json_ld(&document, "faq", &seo::faq_schema(&FAQ_ENTRIES));
                }
            }
            || ()
        },
        (),
    );

    // Hero cinematic + section reveals; both tear down on route change.
    {
        let gate = (*gate).clone();
        use_effect_with_deps(
            move |_| {
                let cinematic = ScrollCinematic::mount(gate);
                let reveals = RevealObserver::mount();
                move || {
                    drop(cinematic);
                    drop(reveals);
                }
            },
            (),
        );
    }

    let landing_css = r#"
        /* --- Hero runway: 300vh of scroll drives the cinematic exit --- */
        .hero {
            height: 300vh;
            position: relative;
        }
        .hero-sticky {
            position: sticky;
            top: 0;
            height: 100vh;
            overflow: hidden;
            display: flex;
            align-items: center;
        }
        .hero-inner {
            display: grid;
            grid-template-columns: minmax(0, 5fr) minmax(0, 6fr);
            align-items: center;
            gap: 3rem;
            width: 100%;
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 2.5rem;
            perspective: 1400px;
        }
        .hero-pill {
            display: inline-block;
            padding: 0.4rem 1rem;
            border: 1px solid rgba(76, 154, 255, 0.35);
            border-radius: 999px;
            background: rgba(76, 154, 255, 0.08);
            color: #a8c7ff;
            font-size: 0.85rem;
            margin-bottom: 1.5rem;
            transform: translateX(var(--hero-pill-x, 0px));
            opacity: var(--hero-pill-opacity, 1);
        }
        .hero-pill span { color: #fff; font-weight: 600; }
        .hero-title {
            font-family: 'Instrument Serif', serif;
            font-size: clamp(2.4rem, 4.5vw, 3.8rem);
            line-height: 1.08;
            font-weight: 400;
            margin: 0 0 1.25rem;
            transform: translateX(var(--hero-title-x, 0px));
            opacity: var(--hero-title-opacity, 1);
        }
        .hero-title-accent { color: #4c9aff; }
        .hero-zillow {
            height: 1em;
            width: auto;
            vertical-align: -0.12em;
        }
        .hero-sub {
            color: #b8bcc8;
            font-size: 1.05rem;
            line-height: 1.6;
            max-width: 34rem;
            margin: 0 0 2rem;
            transform: translateX(var(--hero-sub-x, 0px));
            opacity: var(--hero-sub-opacity, 1);
        }
        .hero-ctas {
            display: flex;
            gap: 1rem;
            flex-wrap: wrap;
            transform: translateY(var(--hero-ctas-y, 0px)) scale(var(--hero-ctas-scale, 1));
            opacity: var(--hero-ctas-opacity, 1);
        }
        .hero-showcase {
            transform-style: preserve-3d;
            transform:
                rotateY(var(--showcase-ry, 0deg))
                rotateX(var(--showcase-rx, 0deg))
                translate3d(var(--showcase-tx, 0%), 0, var(--showcase-tz, 0px))
                scale(var(--showcase-scale, 1));
            opacity: var(--showcase-opacity, 1);
            will-change: transform, opacity;
        }

        /* --- One-shot section reveals --- */
        body.reveal-armed [data-reveal] {
            opacity: 0;
            transform: translateY(24px);
        }
        body.reveal-armed [data-reveal].revealed {
            opacity: 1;
            transform: none;
            transition:
                opacity 0.7s ease var(--reveal-delay, 0s),
                transform 0.7s ease var(--reveal-delay, 0s);
        }

        /* --- Sections --- */
        .divider {
            height: 1px;
            max-width: 1100px;
            margin: 0 auto;
            background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.14), transparent);
        }
        .section-tag {
            display: block;
            text-align: center;
            color: #4c9aff;
            font-size: 0.85rem;
            font-weight: 600;
            letter-spacing: 0.14em;
            text-transform: uppercase;
            margin-bottom: 1rem;
        }
        .section-title {
            font-family: 'Instrument Serif', serif;
            font-weight: 400;
            text-align: center;
            font-size: clamp(2rem, 3.5vw, 3rem);
            line-height: 1.15;
            margin: 0 0 1rem;
        }
        .section-title-accent { color: #4c9aff; }
        .section-sub {
            text-align: center;
            color: #b8bcc8;
            margin: 0 auto 3rem;
            max-width: 38rem;
        }
        .features, .how-it-works, .faq {
            padding: 6rem 2rem;
            max-width: 1100px;
            margin: 0 auto;
        }
        .feature-grid {
            display: grid;
            grid-template-columns: repeat(3, minmax(0, 1fr));
            gap: 1.25rem;
            margin-top: 3rem;
        }
        .feature-card {
            padding: 1.75rem;
            border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 16px;
            background: rgba(255, 255, 255, 0.03);
        }
        .feature-card h3 { margin: 0.75rem 0 0.5rem; font-size: 1.05rem; }
        .feature-card p { color: #b8bcc8; font-size: 0.95rem; line-height: 1.55; margin: 0; }
        .feature-icon { font-size: 1.6rem; }
        .steps {
            list-style: none;
            display: grid;
            grid-template-columns: repeat(3, minmax(0, 1fr));
            gap: 1.5rem;
            padding: 0;
            margin: 3rem 0 0;
            counter-reset: step;
        }
        .step { position: relative; padding: 1.5rem; }
        .step h3 { margin: 1rem 0 0.5rem; }
        .step p { color: #b8bcc8; font-size: 0.95rem; line-height: 1.55; margin: 0; }
        .step-number {
            width: 2.25rem;
            height: 2.25rem;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            background: rgba(76, 154, 255, 0.12);
            border: 1px solid rgba(76, 154, 255, 0.4);
            color: #a8c7ff;
            font-weight: 600;
        }
        .faq-list { max-width: 44rem; margin: 3rem auto 0; }
        .faq-item {
            padding: 1.5rem 0;
            border-bottom: 1px solid rgba(255, 255, 255, 0.08);
        }
        .faq-item dt { font-weight: 600; margin-bottom: 0.6rem; }
        .faq-item dd { color: #b8bcc8; margin: 0; line-height: 1.6; }

        /* --- Bottom CTA --- */
        .bottom-cta {
            padding: 6rem 2rem 7rem;
            text-align: center;
        }
        .bottom-cta-title {
            font-family: 'Instrument Serif', serif;
            font-weight: 400;
            font-size: clamp(2rem, 3.5vw, 3rem);
            margin: 0 0 0.75rem;
        }
        .bottom-cta-title-accent { color: #4c9aff; }
        .bottom-cta-sub { color: #b8bcc8; margin: 0 0 2.5rem; }
        .bottom-cta-buttons {
            display: flex;
            gap: 1rem;
            justify-content: center;
            flex-wrap: wrap;
            margin-bottom: 3rem;
        }

        @media (max-width: 968px) {
            .feature-grid, .steps { grid-template-columns: 1fr; }
        }
        @media (max-width: 768px) {
            /* No runway on narrow layouts: the cinematic is not mounted. */
            .hero { height: auto; }
            .hero-sticky { position: static; height: auto; padding: 7rem 0 3rem; }
            .hero-inner { grid-template-columns: 1fr; gap: 2rem; }
            .features, .how-it-works, .faq { padding: 4rem 1.25rem; }
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>

            <SvgFilters />

            // Dot grid background
            <div class="dot-grid" aria-hidden="true"></div>

            <nav class="site-nav">
                <img
                    src="/static/text-logo.png"
                    alt="Zcomments"
                    width="140"
                    height="32"
                    class="nav-logo"
                />
                <div class="nav-links">
                    <a href="#features" data-mp-event="nav_features_clicked">{"Features"}</a>
                    <a href="#how-it-works" data-mp-event="nav_how_it_works_clicked">{"How it works"}</a>
                    <a href="#faq" data-mp-event="nav_faq_clicked">{"FAQ"}</a>
                </div>
                <a
                    href={config::COFFEE_URL}
                    class="nav-coffee"
                    target="_blank"
                    rel="noopener noreferrer"
                    data-mp-event="nav_coffee_clicked"
                >
                    {"☕"}
                </a>
                <NavCtaLink class="nav-cta">
                    <img
                        src="/static/text-logo-2.png"
                        alt="Zcomments"
                        width="100"
                        height="22"
                        class="nav-cta-logo"
                    />
                    {" →"}
                </NavCtaLink>
            </nav>

            <main>
                // Hero: the scroll-lock cinematic plays over this section.
                <section class="hero" aria-label="Download Zcomments" data-scroll="hero-section">
                    <div class="hero-sticky">
                        <div class="hero-inner">
                            <div class="hero-text">
                                <div class="hero-pill" data-scroll="hero-pill">
                                    {"Free on Chrome & Safari — "}<span>{"Install now"}</span>
                                </div>

                                <h1 class="hero-title" data-scroll="hero-title">
                                    {"The "}
                                    <span class="hero-title-accent">{"comment section"}</span>
                                    <br />
                                    <img
                                        src="/static/zillow-text-logo.png"
                                        alt="Zillow"
                                        width="200"
                                        height="48"
                                        class="hero-zillow"
                                    />
                                    {" is missing."}
                                </h1>

                                <p class="hero-sub" data-scroll="hero-sub">
                                    {"Discuss home prices, neighborhoods, and what people really think about properties on the market. Zcomments adds a "}
                                    <strong>{"free comment section"}</strong>
                                    {" to every Zillow listing."}
                                </p>

                                <div class="hero-ctas" data-scroll="hero-ctas">
                                    <GlowButton
                                        href={config::CHROME_STORE_URL}
                                        icon={html! { <ChromeLogo /> }}
                                        label="Download for Chrome"
                                        tracking_event="chrome_download_clicked"
                                        section="hero"
                                    />
                                    <GlowButton
                                        href={config::APP_STORE_URL}
                                        icon={html! { <SafariLogo /> }}
                                        label="Download for Safari"
                                        tracking_event="safari_download_clicked"
                                        section="hero"
                                    />
                                </div>
                            </div>

                            <div class="hero-showcase" data-scroll="hero-showcase">
                                <Showcase gate={(*gate).clone()} />
                            </div>
                        </div>
                    </div>
                </section>

                <div class="divider" data-reveal=""></div>

                <section id="features" class="features" aria-label="Features">
                    <span class="section-tag" data-reveal="">{"Features"}</span>
                    <h2 class="section-title" data-reveal="" style="--reveal-delay: 0.08s">
                        {"Everything you need to"}
                        <br />
                        <span class="section-title-accent">{"discuss"}</span>
                        {" real estate"}
                    </h2>
                    <p class="section-sub" data-reveal="" style="--reveal-delay: 0.16s">
                        {"Zcomments turns every Zillow listing into a conversation."}
                    </p>

                    <div class="feature-grid">
                        {
                            FEATURES.iter().enumerate().map(|(i, feature)| html! {
                                <article
                                    key={i}
                                    class="feature-card"
                                    data-reveal=""
                                    style={format!("--reveal-delay: {:.2}s", i as f64 * 0.08)}
                                >
                                    <div class="feature-icon">{feature.icon}</div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.text}</p>
                                </article>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <div class="divider" data-reveal=""></div>

                <section id="how-it-works" class="how-it-works" aria-label="How it works">
                    <span class="section-tag" data-reveal="">{"How it works"}</span>
                    <h2 class="section-title" data-reveal="" style="--reveal-delay: 0.08s">
                        {"Up and running "}
                        <span class="section-title-accent">{"in seconds"}</span>
                    </h2>

                    <ol class="steps">
                        {
                            STEPS.iter().enumerate().map(|(i, step)| html! {
                                <li
                                    key={i}
                                    class="step"
                                    data-reveal=""
                                    style={format!("--reveal-delay: {:.2}s", i as f64 * 0.12)}
                                >
                                    <div class="step-number">{i + 1}</div>
                                    <h3>{step.title}</h3>
                                    <p>{step.text}</p>
                                </li>
                            }).collect::<Html>()
                        }
                    </ol>
                </section>

                <div class="divider" data-reveal=""></div>

                <section id="faq" class="faq" aria-label="Frequently asked questions">
                    <span class="section-tag" data-reveal="">{"FAQ"}</span>
                    <h2 class="section-title" data-reveal="" style="--reveal-delay: 0.08s">
                        {"Frequently asked "}
                        <span class="section-title-accent">{"questions"}</span>
                    </h2>

                    <dl class="faq-list">
                        {
                            FAQ_ENTRIES.iter().enumerate().map(|(i, entry)| html! {
                                <div
                                    key={i}
                                    class="faq-item"
                                    data-reveal=""
                                    style={format!("--reveal-delay: {:.2}s", i as f64 * 0.06)}
                                >
                                    <dt>{entry.question}</dt>
                                    <dd>{entry.answer}</dd>
                                </div>
                            }).collect::<Html>()
                        }
                    </dl>
                </section>

                <section class="bottom-cta" aria-label="Download">
                    <h2 class="bottom-cta-title" data-reveal="">
                        {"Ready to join the "}
                        <span class="bottom-cta-title-accent">{"conversation?"}</span>
                    </h2>
                    <p class="bottom-cta-sub" data-reveal="" style="--reveal-delay: 0.1s">
                        {"Install Zcomments in seconds. Free forever."}
                    </p>
                    <div class="bottom-cta-buttons" data-reveal="" style="--reveal-delay: 0.2s">
                        <GlowButton
                            href={config::CHROME_STORE_URL}
                            icon={html! { <ChromeLogo /> }}
                            label="Download for Chrome"
                            tracking_event="chrome_download_clicked"
                            section="bottom_cta"
                        />
                        <GlowButton
                            href={config::APP_STORE_URL}
                            icon={html! { <SafariLogo /> }}
                            label="Download for Safari"
                            tracking_event="safari_download_clicked"
                            section="bottom_cta"
                        />
                    </div>
                    <div data-reveal="" style="--reveal-delay: 0.3s">
                        <EmailSignup />
                    </div>
                </section>
            </main>

            <SiteFooter />
        </div>
    }
}
