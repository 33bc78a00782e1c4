use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Renders its children hidden and fades them in after `delay_ms`.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.setter();
        use_effect_with_deps(
            move |delay_ms: &u32| {
                let timeout = Timeout::new(*delay_ms, move || visible.set(true));
                // dropping the timeout cancels it if we unmount first
                move || drop(timeout)
            },
            props.delay_ms,
        );
    }

    html! {
        <div class={classes!("fade-in", (*visible).then_some("visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
