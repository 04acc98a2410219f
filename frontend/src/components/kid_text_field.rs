use shared::KidField;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KidTextFieldProps {
    pub field: KidField,
    pub value: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<InputEvent>,
}

/// Labelled input for one kid field with its validation message underneath
#[function_component(KidTextField)]
pub fn kid_text_field(props: &KidTextFieldProps) -> Html {
    let id = format!("kid-{}", props.field.name());
    let has_error = props.error.is_some();
    let classes = classes!("register-kid-input", has_error.then_some("input-error"));

    html! {
        <div class={classes!("form-group", has_error.then_some("has-error"))}>
            <label for={id.clone()}>{props.field.label()}</label>
            <input
                id={id}
                name={props.field.name()}
                type={props.field.input_type()}
                class={classes}
                value={props.value.clone()}
                oninput={props.on_input.clone()}
                disabled={props.disabled}
                aria-invalid={has_error.to_string()}
            />
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}
