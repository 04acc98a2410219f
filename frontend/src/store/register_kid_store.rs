use std::rc::Rc;

use shared::{Kid, KidFormErrors};
use yew::prelude::*;

/// Shared state behind the register/edit kid modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterKidState {
    /// A "new kid" modal is open
    pub gonna_register_new_kid: bool,
    /// An "edit kid" modal is open
    pub gonna_edit_kid: bool,
    /// Record being edited while `gonna_edit_kid` is set
    pub editing_kid: Option<Kid>,
    /// Field errors from the last rejected save
    pub form_errors: Option<KidFormErrors>,
}

impl RegisterKidState {
    pub fn is_modal_open(&self) -> bool {
        self.gonna_register_new_kid || self.gonna_edit_kid
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterKidAction {
    OpenRegister,
    OpenEdit(Kid),
    /// Clears both modal flags; form errors are left to `ClearFormErrors`
    Close,
    SetFormErrors(KidFormErrors),
    ClearFormErrors,
}

impl Reducible for RegisterKidState {
    type Action = RegisterKidAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RegisterKidAction::OpenRegister => {
                next.gonna_register_new_kid = true;
                next.gonna_edit_kid = false;
                next.editing_kid = None;
            }
            RegisterKidAction::OpenEdit(kid) => {
                next.gonna_register_new_kid = false;
                next.gonna_edit_kid = true;
                next.editing_kid = Some(kid);
            }
            RegisterKidAction::Close => {
                next.gonna_register_new_kid = false;
                next.gonna_edit_kid = false;
                next.editing_kid = None;
            }
            RegisterKidAction::SetFormErrors(errors) => {
                next.form_errors = Some(errors);
            }
            RegisterKidAction::ClearFormErrors => {
                if next.form_errors.is_none() {
                    return self;
                }
                next.form_errors = None;
            }
        }
        Rc::new(next)
    }
}

pub type RegisterKidContext = UseReducerHandle<RegisterKidState>;

#[derive(Properties, PartialEq)]
pub struct RegisterKidProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RegisterKidProvider)]
pub fn register_kid_provider(props: &RegisterKidProviderProps) -> Html {
    let store = use_reducer(RegisterKidState::default);

    html! {
        <ContextProvider<RegisterKidContext> context={store}>
            { for props.children.iter() }
        </ContextProvider<RegisterKidContext>>
    }
}

/// Access the register-kid store; must be rendered under [`RegisterKidProvider`]
#[hook]
pub fn use_register_kid_store() -> RegisterKidContext {
    use_context::<RegisterKidContext>().expect("use_register_kid_store called outside RegisterKidProvider")
}
