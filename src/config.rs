use log::Level;

// Hero background: slow zoom plus half-speed drift.
pub const HERO_BG_SCALE_RATE: f64 = 0.0002;
pub const HERO_BG_SHIFT_RATE: f64 = 0.5;
pub const HERO_BG_BRIGHTNESS: f64 = 0.4;

// Hero title block fades out over the first ~330px of scroll.
pub const HERO_FADE_RATE: f64 = 0.003;
pub const HERO_CONTENT_SHIFT_RATE: f64 = 0.3;

pub const CHAPTER_BG_SHIFT_RATE: f64 = 0.3;
pub const CHAPTER_BG_BRIGHTNESS: f64 = 0.3;
pub const CHAPTER_ONE_ANCHOR: f64 = 800.0;
pub const CHAPTER_TWO_ANCHOR: f64 = 1800.0;

/// Edge length of the square cursor glow, in px.
pub const GLOW_SIZE: f64 = 384.0;

pub const TEXT_STAGGER_SECS: f64 = 0.2;
pub const CARD_STAGGER_SECS: f64 = 0.2;

pub fn coalesce_to_animation_frame() -> bool {
    true
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Image assets are copied to `/assets` by trunk.
pub fn asset_url(name: &str) -> String {
    format!("/assets/{}", urlencoding::encode(name))
}
