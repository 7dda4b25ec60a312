use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

/// Shared site footer: store links, legal links, copyright.
#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="site-footer">
            <nav class="footer-nav" aria-label="Footer">
                <a
                    href={config::CHROME_STORE_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    data-mp-event="footer_chrome_store_clicked"
                >
                    {"Chrome Web Store"}
                </a>
                <a
                    href={config::APP_STORE_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    data-mp-event="footer_app_store_clicked"
                >
                    {"App Store"}
                </a>
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
            </nav>
            <p>{format!("© {year} Zcomments. All rights reserved.")}</p>
        </footer>
    }
}
