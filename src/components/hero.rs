use yew::prelude::*;

use crate::components::call_to_action::inert_cta;
use crate::components::icons::{ChevronIcon, PlayIcon};
use crate::config::{self, TEXT_STAGGER_SECS};
use crate::content::{stagger_delay, HERO_BACKGROUND};
use crate::effects::parallax::{layer_style, ParallaxLayer, ScrollOffset};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub scroll: ScrollOffset,
}

fn delay(step: usize) -> String {
    format!("animation-delay: {};", stagger_delay(step, TEXT_STAGGER_SECS))
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let background = layer_style(ParallaxLayer::HeroBackground, props.scroll);
    let content = layer_style(ParallaxLayer::HeroContent, props.scroll);

    let background_style = format!(
        "background-image: url(\"{}\"); {}",
        config::asset_url(HERO_BACKGROUND),
        background.to_css()
    );

    html! {
        <section class="hero">
            <div class="hero-layers">
                <div class="hero-background" style={background_style}></div>
                <div class="hero-shade"></div>
                <div class="hero-noise"></div>
            </div>

            <div class="hero-inner">
                <div class="hero-content" style={content.to_css()}>
                    <h1 class="hero-title">
                        <span class="fade-in-up" style={delay(1)}>{"THE"}</span>
                        <br />
                        <span class="fade-in-up hero-title-name" style={delay(2)}>{"BLACKSON"}</span>
                        <br />
                        <span class="fade-in-up hero-title-small" style={delay(3)}>{"INVESTIGATIONS"}</span>
                    </h1>

                    <p class="hero-tagline fade-in-up" style={delay(4)}>
                        {"An AI-Powered Detective Visual Novel"}
                        <br />
                        <span class="hero-tagline-sub">{"Where Logic Meets Horror"}</span>
                    </p>

                    <div class="hero-actions fade-in-up" style={delay(5)}>
                        <button class="cta-button" onclick={inert_cta("Play Now")}>
                            <span class="cta-fill"></span>
                            <span class="cta-label">
                                <PlayIcon size={20} />
                                {"Play Now"}
                            </span>
                        </button>
                        <button class="ghost-button" onclick={inert_cta("Watch Trailer")}>
                            {"Watch Trailer"}
                        </button>
                    </div>
                </div>

                <div class="scroll-hint">
                    <ChevronIcon size={32} />
                </div>
            </div>
        </section>
    }
}
