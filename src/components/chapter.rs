use yew::prelude::*;

use crate::components::call_to_action::inert_cta;
use crate::components::icons::ChevronIcon;
use crate::config::{self, TEXT_STAGGER_SECS};
use crate::content::{stagger_delay, Chapter, ImageSide};
use crate::effects::parallax::{layer_style, ParallaxLayer, ScrollOffset};
use crate::state::ChapterId;

#[derive(Properties, PartialEq)]
pub struct ChapterSectionProps {
    pub chapter: &'static Chapter,
    pub scroll: ScrollOffset,
    pub on_enter: Callback<ChapterId>,
    pub on_leave: Callback<ChapterId>,
}

#[function_component(ChapterSection)]
pub fn chapter_section(props: &ChapterSectionProps) -> Html {
    let chapter = props.chapter;
    let asset = config::asset_url(chapter.background);

    let background_style = format!(
        "background-image: url(\"{}\"); {}",
        asset,
        layer_style(ParallaxLayer::ChapterBackground(chapter.id), props.scroll).to_css()
    );

    let onmouseenter = {
        let on_enter = props.on_enter.clone();
        let id = chapter.id;
        Callback::from(move |_: MouseEvent| on_enter.emit(id))
    };
    let onmouseleave = {
        let on_leave = props.on_leave.clone();
        let id = chapter.id;
        Callback::from(move |_: MouseEvent| on_leave.emit(id))
    };

    let side_class = match chapter.image_side {
        ImageSide::Left => "image-left",
        ImageSide::Right => "image-right",
    };

    let paragraphs = chapter.paragraphs.iter().enumerate().map(|(idx, text)| {
        html! {
            <p class="fade-in-up" style={format!("animation-delay: {};", stagger_delay(idx + 1, TEXT_STAGGER_SECS))}>
                {*text}
            </p>
        }
    });

    html! {
        <section class={classes!("chapter", format!("chapter-{}", chapter.accent), side_class)}>
            <div class="chapter-background" style={background_style}></div>
            <div class="chapter-shade"></div>

            <div class="chapter-inner">
                <div class="chapter-text" {onmouseenter} {onmouseleave}>
                    <div class="chapter-badge">{chapter.numeral}</div>
                    <h2 class="chapter-title">
                        <span class="chapter-title-main">{chapter.title}</span>
                        <br />
                        <span class="chapter-title-sub">{chapter.subtitle}</span>
                    </h2>
                    <div class="chapter-body">
                        { for paragraphs }
                        <p class="fade-in-up chapter-themes"
                            style={format!("animation-delay: {};", stagger_delay(chapter.paragraphs.len() + 1, TEXT_STAGGER_SECS))}>
                            <span class="chapter-themes-label">{"Themes:"}</span>
                            {" "}{chapter.themes}
                        </p>
                    </div>
                    <button class="chapter-button" onclick={inert_cta(chapter.explore_label)}>
                        <span class="cta-fill"></span>
                        <span class="cta-label">
                            {chapter.explore_label}
                            <ChevronIcon size={20} class={classes!("chevron-right")} />
                        </span>
                    </button>
                </div>

                <div class="chapter-image">
                    <div class="chapter-image-glow"></div>
                    <div class="chapter-image-frame">
                        <img src={asset} alt={chapter.image_alt} />
                        <div class="chapter-image-shade"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
