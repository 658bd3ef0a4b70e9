use crate::config::{
    CHAPTER_BG_BRIGHTNESS, CHAPTER_BG_SHIFT_RATE, CHAPTER_ONE_ANCHOR, CHAPTER_TWO_ANCHOR,
    HERO_BG_BRIGHTNESS, HERO_BG_SCALE_RATE, HERO_BG_SHIFT_RATE, HERO_CONTENT_SHIFT_RATE,
    HERO_FADE_RATE,
};
use crate::state::ChapterId;

/// Vertical scroll offset in px from the top of the page. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    /// Overscroll bounce on touch devices reports negative offsets, and a
    /// detached window can hand back NaN. Both read as the top of the page.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() || raw < 0.0 {
            ScrollOffset(0.0)
        } else {
            ScrollOffset(raw)
        }
    }

    pub fn px(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParallaxLayer {
    HeroBackground,
    HeroContent,
    ChapterBackground(ChapterId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub scale: f64,
    pub translate_y: f64,
    /// Raw formula output. Can drop below zero once the hero has scrolled away.
    pub opacity: f64,
    pub brightness: f64,
}

impl LayerStyle {
    const NEUTRAL: LayerStyle = LayerStyle {
        scale: 1.0,
        translate_y: 0.0,
        opacity: 1.0,
        brightness: 1.0,
    };

    pub fn to_css(&self) -> String {
        let mut transform = String::new();
        if self.scale != 1.0 {
            transform.push_str(&format!("scale({}) ", self.scale));
        }
        transform.push_str(&format!("translateY({}px)", self.translate_y));

        let mut css = format!("transform: {};", transform);
        if self.opacity != 1.0 {
            css.push_str(&format!(" opacity: {};", self.opacity.clamp(0.0, 1.0)));
        }
        if self.brightness != 1.0 {
            css.push_str(&format!(" filter: brightness({});", self.brightness));
        }
        css
    }
}

pub fn layer_style(layer: ParallaxLayer, offset: ScrollOffset) -> LayerStyle {
    let s = offset.px();
    match layer {
        ParallaxLayer::HeroBackground => LayerStyle {
            scale: 1.0 + s * HERO_BG_SCALE_RATE,
            translate_y: s * HERO_BG_SHIFT_RATE,
            brightness: HERO_BG_BRIGHTNESS,
            ..LayerStyle::NEUTRAL
        },
        ParallaxLayer::HeroContent => LayerStyle {
            translate_y: s * HERO_CONTENT_SHIFT_RATE,
            opacity: 1.0 - s * HERO_FADE_RATE,
            ..LayerStyle::NEUTRAL
        },
        ParallaxLayer::ChapterBackground(chapter) => {
            let anchor = match chapter {
                ChapterId::One => CHAPTER_ONE_ANCHOR,
                ChapterId::Two => CHAPTER_TWO_ANCHOR,
            };
            LayerStyle {
                translate_y: (s - anchor) * CHAPTER_BG_SHIFT_RATE,
                brightness: CHAPTER_BG_BRIGHTNESS,
                ..LayerStyle::NEUTRAL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_bg(s: f64) -> LayerStyle {
        layer_style(ParallaxLayer::HeroBackground, ScrollOffset::new(s))
    }

    fn hero_content(s: f64) -> LayerStyle {
        layer_style(ParallaxLayer::HeroContent, ScrollOffset::new(s))
    }

    #[test]
    fn negative_and_nan_offsets_read_as_top() {
        assert_eq!(ScrollOffset::new(-35.0).px(), 0.0);
        assert_eq!(ScrollOffset::new(f64::NAN).px(), 0.0);
        assert_eq!(ScrollOffset::new(12.5).px(), 12.5);
    }

    #[test]
    fn page_top_is_at_rest() {
        let bg = hero_bg(0.0);
        assert_eq!(bg.scale, 1.0);
        assert_eq!(bg.translate_y, 0.0);
        assert_eq!(bg.brightness, 0.4);

        let content = hero_content(0.0);
        assert_eq!(content.opacity, 1.0);
        assert_eq!(content.translate_y, 0.0);
    }

    #[test]
    fn scale_rises_and_opacity_falls_with_scroll() {
        let mut prev_scale = f64::MIN;
        let mut prev_opacity = f64::MAX;
        for step in 0..200 {
            let s = step as f64 * 25.0;
            let scale = hero_bg(s).scale;
            let opacity = hero_content(s).opacity;
            assert!(scale >= prev_scale, "scale dipped at {}", s);
            assert!(opacity <= prev_opacity, "opacity rose at {}", s);
            prev_scale = scale;
            prev_opacity = opacity;
        }
    }

    #[test]
    fn three_sample_scroll_walk() {
        let samples = [0.0, 400.0, 2000.0];
        let bg: Vec<_> = samples.iter().map(|&s| hero_bg(s)).collect();
        let content: Vec<_> = samples.iter().map(|&s| hero_content(s)).collect();

        assert!(content[0].opacity > content[1].opacity);
        assert!(content[1].opacity > content[2].opacity);
        assert!(bg[0].scale < bg[1].scale);
        assert!(bg[1].scale < bg[2].scale);

        assert!((bg[1].scale - 1.08).abs() < 1e-12);
        assert!((bg[2].scale - 1.4).abs() < 1e-12);
        assert!((content[1].opacity - -0.2).abs() < 1e-12);
        assert!((content[2].opacity - -5.0).abs() < 1e-12);
        assert_eq!(bg[2].translate_y, 1000.0);
        assert!((content[2].translate_y - 600.0).abs() < 1e-9);
    }

    #[test]
    fn chapter_backgrounds_pivot_on_their_anchor() {
        let one = |s| layer_style(ParallaxLayer::ChapterBackground(ChapterId::One), ScrollOffset::new(s));
        let two = |s| layer_style(ParallaxLayer::ChapterBackground(ChapterId::Two), ScrollOffset::new(s));

        assert_eq!(one(800.0).translate_y, 0.0);
        assert_eq!(two(1800.0).translate_y, 0.0);
        assert!((one(0.0).translate_y - -240.0).abs() < 1e-9);
        assert!((two(0.0).translate_y - -540.0).abs() < 1e-9);
        assert_eq!(one(0.0).brightness, 0.3);
        assert_eq!(two(5000.0).scale, 1.0);
    }

    #[test]
    fn css_clamps_opacity_but_keeps_transform() {
        let css = hero_content(2000.0).to_css();
        assert!(css.contains("opacity: 0;"), "got {}", css);
        assert!(css.contains("translateY(600"), "got {}", css);
        assert!(!css.contains("filter"));
    }

    #[test]
    fn css_for_background_carries_scale_and_filter() {
        let css = hero_bg(400.0).to_css();
        assert!(css.starts_with("transform: scale(1.08) translateY(200px);"), "got {}", css);
        assert!(css.contains("filter: brightness(0.4);"));
        assert!(!css.contains("opacity"));
    }
}
