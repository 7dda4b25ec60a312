use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::utils::analytics;

#[derive(Properties, PartialEq)]
pub struct AnalyticsProviderProps {
    pub children: Children,
}

/// Initializes analytics and wires up declarative click tracking: any
/// click that bubbles from an element inside `[data-mp-event]` tracks the
/// attribute value. Capture phase, so stopPropagation in page code can't
/// hide clicks from it.
#[function_component(AnalyticsProvider)]
pub fn analytics_provider(props: &AnalyticsProviderProps) -> Html {
    use_effect_with_deps(
        move |_| {
            analytics::init();

            let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                    Some(target) => target,
                    None => return,
                };
                if let Ok(Some(tracked)) = target.closest("[data-mp-event]") {
                    if let Some(name) = tracked.get_attribute("data-mp-event") {
                        analytics::track(&name);
                    }
                }
            });

            let document = web_sys::window().and_then(|w| w.document());
            if let Some(document) = document.as_ref() {
                let _ = document.add_event_listener_with_callback_and_bool(
                    "click",
                    on_click.as_ref().unchecked_ref(),
                    true,
                );
            }

            move || {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document.remove_event_listener_with_callback_and_bool(
                        "click",
                        on_click.as_ref().unchecked_ref(),
                        true,
                    );
                }
            }
        },
        (),
    );

    html! { <>{ for props.children.iter() }</> }
}
