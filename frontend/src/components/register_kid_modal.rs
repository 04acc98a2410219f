use shared::{Kid, KidField};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::forms::kid_form::{
    plan_settlement, KidFormAction, KidFormState, ModalEffect, SubmitAction,
};
use super::kid_text_field::KidTextField;
use crate::hooks::use_kid_register::use_kid_register;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct RegisterKidModalProps {
    pub open: bool,
    pub title_modal: String,
    pub on_new_kid_success: Callback<Kid>,
    #[prop_or_default]
    pub kid: Option<Kid>,
    pub api_client: ApiClient,
}

#[function_component(RegisterKidModal)]
pub fn register_kid_modal(props: &RegisterKidModalProps) -> Html {
    let register = use_kid_register(&props.api_client);
    let form = use_reducer(|| KidFormState::seeded_from(props.kid.as_ref()));
    let is_submitting = use_state(|| false);
    let submit_error = use_state(|| Option::<String>::None);
    let mounted = use_mut_ref(|| true);

    // Field errors belong to this modal instance only
    {
        let register = register.clone();
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || {
                *mounted.borrow_mut() = false;
                register.clear_errors();
            }
        });
    }

    let on_input = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(action) = KidFormAction::from_input(&input.name(), input.value()) {
                dispatcher.dispatch(action);
            }
        })
    };

    let on_close = {
        let register = register.clone();
        Callback::from(move |_: MouseEvent| register.close())
    };

    let on_backdrop_click = {
        let register = register.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            register.close();
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_submit = {
        let register = register.clone();
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let submit_error = submit_error.clone();
        let mounted = mounted.clone();
        let existing = props.kid.clone();
        let on_new_kid_success = props.on_new_kid_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            e.stop_propagation();

            if *is_submitting {
                return;
            }

            let action = SubmitAction::choose(existing.as_ref(), &form.kid);
            is_submitting.set(true);
            submit_error.set(None);

            let register = register.clone();
            let is_submitting = is_submitting.clone();
            let submit_error = submit_error.clone();
            let mounted = mounted.clone();
            let on_new_kid_success = on_new_kid_success.clone();

            spawn_local(async move {
                let outcome = match action {
                    SubmitAction::Create(kid) => register.save_new_kid(kid).await,
                    SubmitAction::Update(kid) => register.update_kid(kid).await,
                };

                let still_mounted = *mounted.borrow();
                if still_mounted {
                    is_submitting.set(false);
                }

                for effect in plan_settlement(still_mounted, &outcome) {
                    if let Some(action) = effect.store_action() {
                        register.dispatch(action);
                    }
                    match effect {
                        ModalEffect::NotifySaved(kid) => on_new_kid_success.emit(kid),
                        ModalEffect::ShowSubmitError(message) => submit_error.set(Some(message)),
                        ModalEffect::PublishErrors(_) | ModalEffect::ClearErrors | ModalEffect::Close => {}
                    }
                }
            });
        })
    };

    if !props.open {
        return html! {};
    }

    let field_error = |field: KidField| -> Option<String> {
        register
            .errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(str::to_string)
    };

    html! {
        <div class="register-kid-modal-backdrop" onclick={on_backdrop_click}>
            <div class="register-kid-modal" role="dialog" aria-modal="true" onclick={on_modal_click}>
                <button type="button" class="register-kid-close" aria-label="Cerrar" onclick={on_close.clone()}>
                    {"✕"}
                </button>

                <div class="register-kid-modal-content">
                    <form class="register-kid-form" onsubmit={on_submit}>
                        <h1 class="register-kid-title">{&props.title_modal}</h1>

                        if let Some(error) = (*submit_error).clone() {
                            <div class="register-kid-error">{error}</div>
                        }

                        <div class="register-kid-grid">
                            { for KidField::ALL.into_iter().map(|field| html! {
                                <KidTextField
                                    key={field.name()}
                                    field={field}
                                    value={form.kid.field(field).to_string()}
                                    error={field_error(field)}
                                    disabled={*is_submitting}
                                    on_input={on_input.clone()}
                                />
                            }) }
                        </div>

                        <div class="register-kid-buttons">
                            <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                                {if *is_submitting { "Guardando..." } else { "Guardar" }}
                            </button>
                            <button type="button" class="btn btn-secondary" onclick={on_close}>
                                {"Cancelar"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
