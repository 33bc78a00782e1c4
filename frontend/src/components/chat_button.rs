use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatButtonProps {
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub large: bool,
}

/// Call-to-action that opens the chat link.
#[function_component(ChatButton)]
pub fn chat_button(props: &ChatButtonProps) -> Html {
    html! {
        <button
            class={classes!("cta-button", props.large.then_some("cta-large"))}
            onclick={props.onclick.clone()}
        >
            <i class="chat-icon"></i>
            <span>{props.label.to_string()}</span>
        </button>
    }
}
