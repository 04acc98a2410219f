use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub kid_count: usize,
    pub on_register_kid: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_click = {
        let on_register_kid = props.on_register_kid.clone();
        Callback::from(move |_: MouseEvent| on_register_kid.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Registro de niños"}</h1>
                <div class="header-right">
                    <span class="kid-count">
                        {match props.kid_count {
                            1 => "1 niño(a) registrado".to_string(),
                            n => format!("{} niños registrados", n),
                        }}
                    </span>
                    <button type="button" class="btn btn-primary" onclick={on_click}>
                        {"Registrar niño(a)"}
                    </button>
                </div>
            </div>
        </header>
    }
}
