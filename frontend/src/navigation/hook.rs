use yew::prelude::*;

use crate::config::ScrollConfig;
use crate::navigation::browser::{self, BrowserController, WindowScrollSource};
use crate::navigation::listener::ScrollSubscription;
use crate::navigation::section::SectionId;
use crate::navigation::tracker::ScrollState;

pub struct NavigationHandle {
    pub state: ScrollState,
    pub scroll_to: Callback<SectionId>,
    pub open_chat: Callback<MouseEvent>,
}

/// Tracks the active section for the lifetime of the calling component.
///
/// The scroll listener is registered on mount and removed on unmount.
#[hook]
pub fn use_navigation(config: ScrollConfig) -> NavigationHandle {
    let state = use_state(ScrollState::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |config: &ScrollConfig| {
                let subscription = BrowserController::in_browser(*config).and_then(|mut controller| {
                    let source = WindowScrollSource::current()?;
                    Some(ScrollSubscription::new(source, move || {
                        if controller.on_scroll() {
                            setter.set(controller.state());
                        }
                    }))
                });

                move || drop(subscription)
            },
            config,
        );
    }

    let scroll_to = Callback::from(browser::scroll_to_section);
    let open_chat = Callback::from(|_: MouseEvent| browser::open_external_chat());

    NavigationHandle {
        state: *state,
        scroll_to,
        open_chat,
    }
}
