use log::info;
use yew::prelude::*;

use crate::components::icons::PlayIcon;

/// Click handler for buttons that have nowhere to go yet.
pub fn inert_cta(label: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        info!("\"{}\" pressed, no launch flow wired up", label);
    })
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="final-cta">
            <div class="final-cta-content">
                <h2 class="gradient-heading">{"Are You Ready to Investigate?"}</h2>
                <p>{"Test your logic. Face your fears. Uncover the truth."}</p>
                <button class="cta-button cta-large" onclick={inert_cta("Start Your Investigation")}>
                    <span class="cta-fill"></span>
                    <span class="cta-label">
                        <PlayIcon size={24} />
                        {"Start Your Investigation"}
                    </span>
                </button>
            </div>
        </section>
    }
}
