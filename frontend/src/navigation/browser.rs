use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, AddEventListenerOptions, Document, HtmlElement, ScrollBehavior, ScrollToOptions,
    Window,
};

use crate::config::ScrollConfig;
use crate::navigation::controller::{self, NavigationController, Viewport};
use crate::navigation::listener::ScrollSource;
use crate::navigation::section::SectionId;
use crate::navigation::tracker::{Region, RegionGeometry};

/// Reads section geometry from the rendered page.
pub struct DomGeometry {
    document: Document,
}

impl DomGeometry {
    pub fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }
}

impl RegionGeometry for DomGeometry {
    fn region(&self, section: SectionId) -> Option<Region> {
        let element = self
            .document
            .get_element_by_id(section.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Region::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn current() -> Option<Self> {
        Some(Self { window: window()? })
    }
}

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> Option<f64> {
        self.window.scroll_y().ok()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn open_in_new_tab(&self, url: &str) {
        if let Err(e) = self
            .window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        {
            warn!("Failed to open {}: {:?}", url, e);
        }
    }
}

/// Window scroll events, delivered to passive listeners.
pub struct WindowScrollSource {
    window: Window,
}

impl WindowScrollSource {
    pub fn current() -> Option<Self> {
        Some(Self { window: window()? })
    }
}

impl ScrollSource for WindowScrollSource {
    type Registration = Closure<dyn FnMut()>;

    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Option<Self::Registration> {
        let callback = Closure::wrap(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(callback)
    }

    fn unsubscribe(&self, callback: Self::Registration) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    }
}

pub type BrowserController = NavigationController<DomGeometry, BrowserViewport>;

impl BrowserController {
    pub fn in_browser(config: ScrollConfig) -> Option<Self> {
        Some(NavigationController::new(
            DomGeometry::current()?,
            BrowserViewport::current()?,
            config,
        ))
    }
}

pub fn scroll_to_section(target: SectionId) {
    match (DomGeometry::current(), BrowserViewport::current()) {
        (Some(geometry), Some(viewport)) => controller::scroll_to_section(&geometry, &viewport, target),
        _ => debug!("No window available, ignoring scroll to {}", target),
    }
}

pub fn open_external_chat() {
    match BrowserViewport::current() {
        Some(viewport) => controller::open_external_chat(&viewport),
        None => debug!("No window available, ignoring chat link"),
    }
}
