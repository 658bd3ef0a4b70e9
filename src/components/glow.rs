use yew::prelude::*;

use crate::effects::pointer::GlowPlacement;

#[derive(Properties, PartialEq)]
pub struct GlowOverlayProps {
    pub placement: GlowPlacement,
}

#[function_component(GlowOverlay)]
pub fn glow_overlay(props: &GlowOverlayProps) -> Html {
    html! {
        <div class="cursor-glow" aria-hidden="true" style={props.placement.to_css()}></div>
    }
}
