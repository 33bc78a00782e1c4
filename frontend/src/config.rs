use log::Level;

/// Chat deep link opened by every call-to-action button.
pub const CHAT_URL: &str = "https://wa.me/233595703977";

pub const SITE_NAME: &str = "TechCraft Studio";

/// Delay before the hero payment promise fades in.
pub const HERO_PROMISE_DELAY_MS: u32 = 200;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose scroll tracking output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tuning for the scroll tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Added to the scroll offset before section ranges are compared, so a
    /// section turns active slightly before its top reaches the viewport top.
    pub lookahead: f64,
    /// The navbar counts as scrolled once the offset is strictly above this.
    pub scrolled_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            lookahead: 100.0,
            scrolled_threshold: 50.0,
        }
    }
}
