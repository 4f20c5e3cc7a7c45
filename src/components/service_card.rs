use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    /// Font Awesome icon name, e.g. `fa-compass-drafting`.
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Card with a hover lift. The lift is driven from state rather than a
/// `:hover` rule so the shadow and transform always move together.
#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let hovered = use_state_eq(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = if *hovered {
        "transform: translateY(-5px); box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);"
    } else {
        "transform: translateY(0); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);"
    };

    html! {
        <div
            class={classes!("service-card", props.class.clone())}
            {style}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="service-icon">
                <i class={classes!("fas", props.icon.to_string())}></i>
            </div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}
