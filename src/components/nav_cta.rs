use yew::prelude::*;

use crate::config;

/// Everything that smells like Safari without being Chrome-based.
fn is_safari(user_agent: &str) -> bool {
    user_agent.contains("Safari")
        && !user_agent.contains("Chrome")
        && !user_agent.contains("Chromium")
}

#[derive(Properties, PartialEq)]
pub struct NavCtaLinkProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Store CTA that points at the Chrome Web Store by default and swaps to
/// the App Store for Safari users. The user agent is read once on mount.
#[function_component(NavCtaLink)]
pub fn nav_cta_link(props: &NavCtaLinkProps) -> Html {
    let href = use_state(|| config::CHROME_STORE_URL.to_string());
    {
        let href = href.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if let Ok(user_agent) = window.navigator().user_agent() {
                        if is_safari(&user_agent) {
                            href.set(config::APP_STORE_URL.to_string());
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <a
            href={(*href).clone()}
            class={props.class.clone()}
            target="_blank"
            rel="noopener noreferrer"
            data-mp-event="nav_get_zcomments_clicked"
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::is_safari;

    #[test]
    fn detects_desktop_safari() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
        assert!(is_safari(ua));
    }

    #[test]
    fn chrome_reports_safari_in_its_ua_but_is_not_safari() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        assert!(!is_safari(ua));
    }

    #[test]
    fn firefox_is_not_safari() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:122.0) Gecko/20100101 Firefox/122.0";
        assert!(!is_safari(ua));
    }
}
