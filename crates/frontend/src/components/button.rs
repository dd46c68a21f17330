//! Button and icon components.

use yew::prelude::*;

/// Properties for Button.
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub primary: bool,
    #[prop_or_default]
    pub accent: bool,
    #[prop_or_default]
    pub colored: bool,
    #[prop_or_default]
    pub raised: bool,
    #[prop_or_default]
    pub fab: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// MDL button.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "mdl-button",
        "mdl-js-button",
        props.primary.then_some("mdl-button--primary"),
        props.accent.then_some("mdl-button--accent"),
        props.colored.then_some("mdl-button--colored"),
        props.raised.then_some("mdl-button--raised"),
        props.fab.then_some("mdl-button--fab")
    );

    html! {
        <button id={props.id.clone()} class={classes} onclick={props.onclick.clone()}>
            { props.children.clone() }
        </button>
    }
}

/// Properties for Icon.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Material Icons ligature name, e.g. "person".
    pub icon: AttrValue,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// Material icon.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <i class="material-icons" style={props.style.clone()}>{ props.icon.clone() }</i>
    }
}
