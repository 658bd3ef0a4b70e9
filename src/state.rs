use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::effects::parallax::ScrollOffset;
use crate::effects::pointer::PointerPosition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChapterId {
    One = 1,
    Two = 2,
}

impl ChapterId {
    pub fn id(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub scroll: ScrollOffset,
    pub pointer: PointerPosition,
    // Tracked, but nothing on the page reads it yet.
    pub active_chapter: Option<ChapterId>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportAction {
    Scrolled(f64),
    PointerMoved(PointerPosition),
    ChapterEntered(ChapterId),
    ChapterLeft(ChapterId),
}

impl Reducible for PageState {
    type Action = ViewportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ViewportAction::Scrolled(raw) => {
                let scroll = ScrollOffset::new(raw);
                if scroll == self.scroll {
                    return self;
                }
                Rc::new(PageState { scroll, ..(*self).clone() })
            }
            ViewportAction::PointerMoved(pointer) => {
                if pointer == self.pointer {
                    return self;
                }
                Rc::new(PageState { pointer, ..(*self).clone() })
            }
            ViewportAction::ChapterEntered(chapter) => {
                if self.active_chapter == Some(chapter) {
                    return self;
                }
                debug!("Chapter {} hovered", chapter.id());
                Rc::new(PageState {
                    active_chapter: Some(chapter),
                    ..(*self).clone()
                })
            }
            ViewportAction::ChapterLeft(chapter) => {
                // A leave that arrives after another panel was entered, or
                // with no prior enter at all, is stale.
                if self.active_chapter != Some(chapter) {
                    return self;
                }
                debug!("Chapter {} left", chapter.id());
                Rc::new(PageState {
                    active_chapter: None,
                    ..(*self).clone()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::parallax::{layer_style, ParallaxLayer};
    use crate::effects::pointer::{glow_placement, GlowPlacement};

    fn apply(actions: &[ViewportAction]) -> Rc<PageState> {
        actions
            .iter()
            .fold(Rc::new(PageState::default()), |state, &action| state.reduce(action))
    }

    #[test]
    fn starts_at_rest() {
        let state = PageState::default();
        assert_eq!(state.scroll.px(), 0.0);
        assert_eq!(state.pointer, PointerPosition::new(0.0, 0.0));
        assert_eq!(state.active_chapter, None);
    }

    #[test]
    fn scroll_and_pointer_keep_latest_value() {
        let state = apply(&[
            ViewportAction::Scrolled(120.0),
            ViewportAction::PointerMoved(PointerPosition::new(10.0, 20.0)),
            ViewportAction::Scrolled(480.0),
            ViewportAction::PointerMoved(PointerPosition::new(500.0, 300.0)),
        ]);
        assert_eq!(state.scroll.px(), 480.0);
        assert_eq!(state.pointer, PointerPosition::new(500.0, 300.0));
    }

    #[test]
    fn overscroll_is_stored_as_zero() {
        let state = apply(&[ViewportAction::Scrolled(250.0), ViewportAction::Scrolled(-40.0)]);
        assert_eq!(state.scroll.px(), 0.0);
    }

    #[test]
    fn enter_then_leave_clears_chapter() {
        let entered = apply(&[ViewportAction::ChapterEntered(ChapterId::One)]);
        assert_eq!(entered.active_chapter, Some(ChapterId::One));
        assert_eq!(entered.active_chapter.map(ChapterId::id), Some(1));

        let left = entered.reduce(ViewportAction::ChapterLeft(ChapterId::One));
        assert_eq!(left.active_chapter, None);
    }

    #[test]
    fn stray_leave_keeps_state_empty() {
        let state = apply(&[ViewportAction::ChapterLeft(ChapterId::Two)]);
        assert_eq!(state.active_chapter, None);
    }

    #[test]
    fn late_leave_does_not_clobber_newer_enter() {
        let state = apply(&[
            ViewportAction::ChapterEntered(ChapterId::One),
            ViewportAction::ChapterEntered(ChapterId::Two),
            ViewportAction::ChapterLeft(ChapterId::One),
        ]);
        assert_eq!(state.active_chapter, Some(ChapterId::Two));
    }

    #[test]
    fn unchanged_input_reuses_state() {
        let state = apply(&[ViewportAction::Scrolled(64.0)]);
        let again = Rc::clone(&state).reduce(ViewportAction::Scrolled(64.0));
        assert!(Rc::ptr_eq(&state, &again));

        let hovered = apply(&[ViewportAction::ChapterEntered(ChapterId::Two)]);
        let rehovered = Rc::clone(&hovered).reduce(ViewportAction::ChapterEntered(ChapterId::Two));
        assert!(Rc::ptr_eq(&hovered, &rehovered));
    }

    #[test]
    fn hover_does_not_touch_scroll_or_pointer() {
        let state = apply(&[
            ViewportAction::Scrolled(900.0),
            ViewportAction::PointerMoved(PointerPosition::new(4.0, 2.0)),
            ViewportAction::ChapterEntered(ChapterId::One),
            ViewportAction::ChapterLeft(ChapterId::One),
        ]);
        assert_eq!(state.scroll.px(), 900.0);
        assert_eq!(state.pointer, PointerPosition::new(4.0, 2.0));
    }

    #[test]
    fn pointer_move_lands_glow_centred() {
        let state = apply(&[ViewportAction::PointerMoved(PointerPosition::new(500.0, 300.0))]);
        assert_eq!(glow_placement(state.pointer), GlowPlacement { left: 308.0, top: 108.0 });
    }

    #[test]
    fn scroll_walk_fades_hero_and_grows_background() {
        let mut state = Rc::new(PageState::default());
        let mut opacities = Vec::new();
        let mut scales = Vec::new();
        for y in [0.0, 400.0, 2000.0] {
            state = state.reduce(ViewportAction::Scrolled(y));
            opacities.push(layer_style(ParallaxLayer::HeroContent, state.scroll).opacity);
            scales.push(layer_style(ParallaxLayer::HeroBackground, state.scroll).scale);
        }
        assert!(opacities.windows(2).all(|w| w[0] > w[1]), "{:?}", opacities);
        assert!(scales.windows(2).all(|w| w[0] < w[1]), "{:?}", scales);
    }
}
