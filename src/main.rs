use log::info;
use yew::prelude::*;

mod config;
mod content;
mod hooks;
mod state;
mod viewport;
mod effects {
    pub mod coalesce;
    pub mod parallax;
    pub mod pointer;
}
mod components {
    pub mod call_to_action;
    pub mod chapter;
    pub mod feature_grid;
    pub mod footer;
    pub mod glow;
    pub mod hero;
    pub mod icons;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting The Blackson Investigations landing page");
    yew::Renderer::<App>::new().render();
}
