use yew::prelude::*;

use crate::config::SITE_NAME;
use crate::navigation::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: SectionId,
    pub scrolled: bool,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps { active, scrolled, on_navigate } = props;

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <h1 class="nav-logo">{SITE_NAME}</h1>
                <div class="nav-links">
                    { for SectionId::nav_items().map(|section| {
                        let onclick = {
                            let on_navigate = on_navigate.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_navigate.emit(section);
                            })
                        };
                        html! {
                            <button
                                key={section.as_str()}
                                class={classes!("nav-link", (section == *active).then_some("active"))}
                                {onclick}
                            >
                                {section.label()}
                            </button>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}
