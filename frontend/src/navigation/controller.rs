use log::debug;

use crate::config::{ScrollConfig, CHAT_URL};
use crate::navigation::section::SectionId;
use crate::navigation::tracker::{RegionGeometry, ScrollState, ScrollTracker};

/// The host primitives navigation needs from the window.
pub trait Viewport {
    /// Current vertical scroll offset, `None` if it cannot be read.
    fn scroll_offset(&self) -> Option<f64>;

    /// Requests an animated scroll to `top`. Does not wait for it to finish.
    fn smooth_scroll_to(&self, top: f64);

    /// Opens `url` in a new, independent browsing context.
    fn open_in_new_tab(&self, url: &str);
}

/// Smooth-scrolls so the top of `target` meets the top of the viewport.
/// Does nothing if the section is not rendered.
pub fn scroll_to_section<G, V>(geometry: &G, viewport: &V, target: SectionId)
where
    G: RegionGeometry,
    V: Viewport,
{
    match geometry.region(target) {
        Some(region) => viewport.smooth_scroll_to(region.start),
        None => debug!("Section {} is not rendered, ignoring scroll request", target),
    }
}

pub fn open_external_chat<V: Viewport>(viewport: &V) {
    viewport.open_in_new_tab(CHAT_URL);
}

/// Scroll tracking bound to one view's geometry and viewport.
pub struct NavigationController<G, V> {
    geometry: G,
    viewport: V,
    tracker: ScrollTracker,
}

impl<G: RegionGeometry, V: Viewport> NavigationController<G, V> {
    pub fn new(geometry: G, viewport: V, config: ScrollConfig) -> Self {
        Self {
            geometry,
            viewport,
            tracker: ScrollTracker::new(config),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.tracker.state()
    }

    /// Handles one scroll event. Returns true if the state changed.
    pub fn on_scroll(&mut self) -> bool {
        let Some(offset) = self.viewport.scroll_offset() else {
            debug!("Scroll offset unavailable, ignoring scroll event");
            return false;
        };

        let changed = self.tracker.on_scroll(offset, &self.geometry);
        if changed {
            debug!("Scroll state now {:?} at offset {}", self.tracker.state(), offset);
        }
        changed
    }
}
