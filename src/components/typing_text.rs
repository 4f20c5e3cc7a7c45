use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub text: AttrValue,
    /// Milliseconds per character.
    #[prop_or(50)]
    pub tick_ms: u32,
}

/// Types its text out one character at a time after mount. The reserved
/// line keeps layout stable while the text grows.
#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let shown = use_state_eq(|| 0usize);

    {
        let shown = shown.clone();
        let total = props.text.chars().count();
        let tick_ms = props.tick_ms;
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    for n in 1..=total {
                        TimeoutFuture::new(tick_ms).await;
                        shown.set(n);
                    }
                });
                || ()
            },
            (),
        );
    }

    let visible: String = props.text.chars().take(*shown).collect();

    html! {
        <span class="typing-text" data-full-text={props.text.clone()}>
            {visible}
        </span>
    }
}
