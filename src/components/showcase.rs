use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anim::gate::GateHandle;
use crate::anim::tilt::TiltController;

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    /// Shared with the scroll cinematic; tilt only writes while it's open.
    pub gate: GateHandle,
}

/// Interactive 3D showcase: a browser-window mockup with the injected
/// comment section floating above it. Frame and overlay tilt independently
/// toward the pointer while the hero is at rest.
#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let container = use_node_ref();
    let frame = use_node_ref();
    let overlay = use_node_ref();

    {
        let container = container.clone();
        let frame = frame.clone();
        let overlay = overlay.clone();
        use_effect_with_deps(
            move |gate: &GateHandle| {
                let controller = match (
                    container.cast::<HtmlElement>(),
                    frame.cast::<HtmlElement>(),
                    overlay.cast::<HtmlElement>(),
                ) {
                    (Some(container), Some(frame), Some(overlay)) => {
                        TiltController::mount(container, frame, overlay, gate.clone())
                    }
                    _ => None,
                };
                move || drop(controller)
            },
            props.gate.clone(),
        );
    }

    html! {
        <section class="showcase" aria-label="Product preview">
            <div ref={container} class="showcase-container">
                // Browser window frame, tilts independently.
                <div ref={frame} class="browser-frame">
                    <div class="browser-bar">
                        <span class="browser-dot browser-dot-red"></span>
                        <span class="browser-dot browser-dot-yellow"></span>
                        <span class="browser-dot browser-dot-green"></span>
                        <span class="browser-url">{"zillow.com/homedetails/372-Matchaponix-Rd"}</span>
                    </div>
                    <div class="browser-content">
                        <img
                            class="browser-main-img"
                            src="/static/zillow-listing.png"
                            alt="Zillow listing page with Zcomments comment section injected below the property details"
                            width="880"
                            height="600"
                        />
                    </div>
                </div>

                // Floating comment section, tilts more dramatically.
                <img
                    ref={overlay}
                    class="showcase-overlay"
                    src="/static/comment-section.png"
                    alt="Close-up of the Zcomments comment section showing user discussions about a property"
                    width="420"
                    height="380"
                />
            </div>
        </section>
    }
}
