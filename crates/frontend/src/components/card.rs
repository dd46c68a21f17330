//! Card components (MDL `mdl-card`).

use yew::prelude::*;

/// Properties for Card.
#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Elevation in dp; MDL ships 2, 3, 4, 6, 8, 16 and 24.
    #[prop_or(2)]
    pub shadow: u8,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Card container.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let classes = classes!(
        "mdl-card",
        format!("mdl-shadow--{}dp", props.shadow),
        props.class.clone()
    );

    html! {
        <div class={classes}>
            { props.children.clone() }
        </div>
    }
}

/// Properties shared by the card sections.
#[derive(Properties, PartialEq)]
pub struct CardSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Card title bar.
#[function_component(CardTitle)]
pub fn card_title(props: &CardSectionProps) -> Html {
    html! {
        <div class={classes!("mdl-card__title", props.class.clone())} style={props.style.clone()}>
            { props.children.clone() }
        </div>
    }
}

/// Heading inside a card title.
#[function_component(CardTitleText)]
pub fn card_title_text(props: &CardSectionProps) -> Html {
    html! {
        <h2 class={classes!("mdl-card__title-text", props.class.clone())} style={props.style.clone()}>
            { props.children.clone() }
        </h2>
    }
}

/// Card body text.
#[function_component(CardText)]
pub fn card_text(props: &CardSectionProps) -> Html {
    html! {
        <div class={classes!("mdl-card__supporting-text", props.class.clone())} style={props.style.clone()}>
            { props.children.clone() }
        </div>
    }
}

/// Card action row.
#[function_component(CardActions)]
pub fn card_actions(props: &CardSectionProps) -> Html {
    html! {
        <div class={classes!("mdl-card__actions", props.class.clone())} style={props.style.clone()}>
            { props.children.clone() }
        </div>
    }
}
