use yew::prelude::*;

/// Hidden SVG filter definitions used by the glow effect.
///
/// SVG blur extends beyond the element's bounding box, where CSS blur()
/// clips at the boundary and cuts the glow off at the edges. The glow icon
/// is heavily scaled, so the blur has to bleed freely in all directions.
#[function_component(SvgFilters)]
pub fn svg_filters() -> Html {
    html! {
        <svg style="display: none;" aria-hidden="true" xmlns="http://www.w3.org/2000/svg">
            <filter id="glow-blur">
                <feGaussianBlur stdDeviation="28" />
            </filter>
        </svg>
    }
}
