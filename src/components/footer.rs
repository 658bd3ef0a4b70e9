use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"© 2025 The Blackson Investigations. All rights reserved."}</p>
            <p class="footer-tagline">{"An AI-Powered Visual Novel Experience"}</p>
        </footer>
    }
}
