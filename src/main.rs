mod anim;
mod components;
mod config;
mod pages;
mod seo;
mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use components::analytics_provider::AnalyticsProvider;
use pages::contact::Contact;
use pages::landing::Landing;
use pages::privacy::Privacy;
use pages::terms::Terms;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        // Unknown paths fall back to the landing page.
        Route::Home | Route::NotFound => html! { <Landing /> },
        Route::Privacy => html! { <Privacy /> },
        Route::Terms => html! { <Terms /> },
        Route::Contact => html! { <Contact /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <AnalyticsProvider>
                <Switch<Route> render={switch} />
            </AnalyticsProvider>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
