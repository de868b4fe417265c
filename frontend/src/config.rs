use log::Level;

pub const INTRO_OVERLAY_ID: &str = "introOverlay";
pub const INTRO_HIDE_DELAY_MS: u32 = 4500;

pub const NAV_ID: &str = "nav";
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
pub const ANCHOR_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

pub const ANIMATE_ATTR: &str = "data-animate";
pub const ANIMATE_SELECTOR: &str = "[data-animate]";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -15% 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_STAGGER_MS: u32 = 150;

pub const HERO_IMAGE_SELECTOR: &str = ".hero__bg img";
pub const PARALLAX_RATE: f64 = 0.3;
pub const PARALLAX_SCALE: f64 = 1.1;

pub const AMBIENT_AUDIO_ID: &str = "ambientSound";
pub const AMBIENT_TOGGLE_SELECTOR: &str = "[data-ambient-toggle]";

pub const HIDDEN_CLASS: &str = "is-hidden";
pub const SCROLLED_CLASS: &str = "is-scrolled";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const FADE_IN_UP_CLASS: &str = "animate-fade-in-up";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
