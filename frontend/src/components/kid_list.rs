use chrono::NaiveDate;
use shared::Kid;
use yew::prelude::*;

use crate::services::date_utils::{format_age, format_birth_date};

#[derive(Properties, PartialEq)]
pub struct KidListProps {
    pub kids: Vec<Kid>,
    pub loading: bool,
    #[prop_or_default]
    pub today: Option<NaiveDate>,
    pub on_edit: Callback<Kid>,
}

#[function_component(KidList)]
pub fn kid_list(props: &KidListProps) -> Html {
    if props.loading && props.kids.is_empty() {
        return html! { <div class="kid-list-loading">{"Cargando..."}</div> };
    }

    if props.kids.is_empty() {
        return html! { <div class="kid-list-empty">{"Aún no hay niños registrados"}</div> };
    }

    html! {
        <table class="kid-list">
            <thead>
                <tr>
                    <th>{"Identificación"}</th>
                    <th>{"Nombre"}</th>
                    <th>{"Nacimiento"}</th>
                    <th>{"Edad"}</th>
                    <th>{"Padre o madre"}</th>
                    <th>{"Contacto"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for props.kids.iter().map(|kid| {
                    let on_edit = {
                        let on_edit = props.on_edit.clone();
                        let kid = kid.clone();
                        Callback::from(move |_: MouseEvent| on_edit.emit(kid.clone()))
                    };
                    let age = props
                        .today
                        .and_then(|today| kid.age_on(today))
                        .map(format_age)
                        .unwrap_or_default();

                    html! {
                        <tr key={kid.id.clone()}>
                            <td>{&kid.identification}</td>
                            <td>{kid.full_name()}</td>
                            <td>{format_birth_date(&kid.date_born)}</td>
                            <td>{age}</td>
                            <td>{kid.parent_full_name()}</td>
                            <td>
                                <div>{&kid.parent_email}</div>
                                <div>{&kid.parent_phone}</div>
                            </td>
                            <td>
                                <button type="button" class="btn btn-secondary" onclick={on_edit}>
                                    {"Editar"}
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
