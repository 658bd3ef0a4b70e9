use yew::prelude::*;

use crate::config::CARD_STAGGER_SECS;
use crate::content::{stagger_delay, FEATURES};

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    html! {
        <section class="features">
            <div class="features-inner">
                <h2 class="gradient-heading">{"Experience True Detective Work"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(idx, feature)| html! {
                        <div class="feature-card" key={feature.title}
                            style={format!("animation-delay: {};", stagger_delay(idx, CARD_STAGGER_SECS))}>
                            <div class="feature-card-sheen"></div>
                            <div class="feature-card-body">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
