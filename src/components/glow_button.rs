use serde_json::json;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anim::glow::AmbientGlow;
use crate::utils::analytics;

#[derive(Properties, PartialEq)]
pub struct GlowButtonProps {
    pub href: AttrValue,
    pub icon: Html,
    pub label: AttrValue,
    #[prop_or_default]
    pub tracking_event: Option<AttrValue>,
    #[prop_or_default]
    pub section: Option<AttrValue>,
}

/// Context-aware glowing card button.
///
/// The glow icon is a blurred, saturated duplicate of the real icon; the
/// ambient controller keeps `--pointer-x`/`--pointer-y` on the card in sync
/// with the cursor so the stylesheet can shift the glow up to ±50% of the
/// card's own dimension, even while the cursor is outside the card.
#[function_component(GlowButton)]
pub fn glow_button(props: &GlowButtonProps) -> Html {
    let card = use_node_ref();
    {
        let card = card.clone();
        use_effect_with_deps(
            move |_| {
                let glow = card.cast::<HtmlElement>().and_then(AmbientGlow::mount);
                move || drop(glow)
            },
            (),
        );
    }

    let onclick = {
        let tracking_event = props.tracking_event.clone();
        let section = props.section.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(event) = tracking_event.as_ref() {
                let section = section.as_deref().unwrap_or("unknown");
                analytics::track_with_props(event, json!({ "section": section }));
            }
        })
    };

    html! {
        <a
            ref={card}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="glow-card"
            {onclick}
        >
            <div class="glow-card-inner">
                <div class="glow-card-glow">{ props.icon.clone() }</div>
                <div class="glow-card-icon">{ props.icon.clone() }</div>
                <span class="glow-card-label">{ props.label.clone() }</span>
            </div>
        </a>
    }
}
