use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PlayIcon)]
pub fn play_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width={props.size.to_string()} height={props.size.to_string()}
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round">
            <polygon points="6 3 20 12 6 21 6 3" />
        </svg>
    }
}

#[function_component(ChevronIcon)]
pub fn chevron_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width={props.size.to_string()} height={props.size.to_string()}
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round">
            <polyline points="6 9 12 15 18 9" />
        </svg>
    }
}
