use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;
mod store;

use components::header::Header;
use components::kid_list::KidList;
use components::register_kid_modal::RegisterKidModal;
use hooks::use_kids::use_kids;
use services::api::ApiClient;
use services::date_utils;
use services::logging::Logger;
use shared::Kid;
use store::register_kid_store::{use_register_kid_store, RegisterKidAction, RegisterKidProvider};

#[function_component(KidsPage)]
fn kids_page() -> Html {
    let api_client = ApiClient::new();
    let kids = use_kids(&api_client);
    let store = use_register_kid_store();

    let on_register_kid = {
        let store = store.clone();
        Callback::from(move |_: ()| store.dispatch(RegisterKidAction::OpenRegister))
    };

    let on_edit_kid = {
        let store = store.clone();
        Callback::from(move |kid: Kid| store.dispatch(RegisterKidAction::OpenEdit(kid)))
    };

    let on_new_kid_success = {
        let upsert_kid = kids.actions.upsert_kid.clone();
        Callback::from(move |kid: Kid| {
            Logger::info_with_component("KidsPage", &format!("Kid {} saved", kid.id));
            upsert_kid.emit(kid);
        })
    };

    let on_retry = {
        let refresh_kids = kids.actions.refresh_kids.clone();
        Callback::from(move |_: MouseEvent| refresh_kids.emit(()))
    };

    // The modal is mounted only while open so each opening starts from a fresh form
    let modal = if store.is_modal_open() {
        let (title, kid, key) = match (&store.editing_kid, store.gonna_edit_kid) {
            (Some(kid), true) => ("Editar niño(a)", Some(kid.clone()), format!("edit-{}", kid.id)),
            _ => ("Registrar niño(a)", None, "register".to_string()),
        };

        html! {
            <RegisterKidModal
                key={key}
                open={true}
                title_modal={title.to_string()}
                on_new_kid_success={on_new_kid_success}
                kid={kid}
                api_client={api_client.clone()}
            />
        }
    } else {
        html! {}
    };

    html! {
        <div class="app">
            <Header kid_count={kids.state.kids.len()} on_register_kid={on_register_kid} />
            <main class="main">
                <div class="container">
                    if let Some(error) = kids.state.error.clone() {
                        <div class="form-message error">
                            {error}
                            <button type="button" class="btn btn-secondary" onclick={on_retry}>
                                {"Reintentar"}
                            </button>
                        </div>
                    }
                    <KidList
                        kids={kids.state.kids.clone()}
                        loading={kids.state.loading}
                        today={date_utils::today()}
                        on_edit={on_edit_kid}
                    />
                </div>
            </main>
            {modal}
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <RegisterKidProvider>
            <KidsPage />
        </RegisterKidProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
