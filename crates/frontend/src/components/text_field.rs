//! Text input component.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::handler::Handler;

/// Properties for TextField.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Receives the field value when Enter is pressed.
    pub on_search: Handler<String>,
}

/// MDL text field.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let onkeydown = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_search.emit(input.value());
            }
        })
    };

    html! {
        <div class="mdl-textfield mdl-js-textfield">
            <input
                class="mdl-textfield__input"
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                style={props.style.clone()}
                {onkeydown}
            />
        </div>
    }
}
