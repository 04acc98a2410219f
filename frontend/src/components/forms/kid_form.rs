use std::rc::Rc;

use shared::{Kid, KidField, KidFormErrors, KidRegisterError, SaveOutcome};
use yew::functional::Reducible;

use crate::store::register_kid_store::RegisterKidAction;

/// Local editable copy of the kid behind the modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KidFormState {
    pub kid: Kid,
}

impl KidFormState {
    pub fn seeded_from(kid: Option<&Kid>) -> Self {
        Self {
            kid: Kid::seeded_from(kid),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum KidFormAction {
    SetField(KidField, String),
}

impl KidFormAction {
    /// Action for an input event, keyed by the input's `name` attribute.
    /// Returns None for names that are not kid fields.
    pub fn from_input(name: &str, value: String) -> Option<Self> {
        let field = name.parse::<KidField>().ok()?;
        Some(KidFormAction::SetField(field, value))
    }
}

impl Reducible for KidFormState {
    type Action = KidFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            KidFormAction::SetField(field, value) => next.kid.set_field(field, value),
        }
        Rc::new(next)
    }
}

/// Which save path a submit takes
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    Create(Kid),
    Update(Kid),
}

impl SubmitAction {
    /// Update when the record the modal was opened with has an id, create otherwise.
    /// The full form state is sent either way.
    pub fn choose(existing: Option<&Kid>, form: &Kid) -> Self {
        if existing.is_some_and(Kid::is_existing) {
            SubmitAction::Update(form.clone())
        } else {
            SubmitAction::Create(form.clone())
        }
    }
}

/// What the modal does once a save settles
#[derive(Debug, Clone, PartialEq)]
pub enum ModalEffect {
    NotifySaved(Kid),
    PublishErrors(KidFormErrors),
    ClearErrors,
    Close,
    ShowSubmitError(String),
}

impl ModalEffect {
    /// Store update carried by this effect, if any
    pub fn store_action(&self) -> Option<RegisterKidAction> {
        match self {
            ModalEffect::PublishErrors(errors) => Some(RegisterKidAction::SetFormErrors(errors.clone())),
            ModalEffect::ClearErrors => Some(RegisterKidAction::ClearFormErrors),
            ModalEffect::Close => Some(RegisterKidAction::Close),
            ModalEffect::NotifySaved(_) | ModalEffect::ShowSubmitError(_) => None,
        }
    }
}

pub fn plan_effects(outcome: &SaveOutcome) -> Vec<ModalEffect> {
    match outcome {
        Ok(kid) => vec![
            ModalEffect::ClearErrors,
            ModalEffect::NotifySaved(kid.clone()),
            ModalEffect::Close,
        ],
        Err(KidRegisterError::Validation(errors)) => vec![ModalEffect::PublishErrors(errors.clone())],
        Err(e) => vec![ModalEffect::ShowSubmitError(submit_error_message(e))],
    }
}

/// Effects for a save that settled after the modal may have gone away.
///
/// Once unmounted only the saved record is still reported; store and banner
/// updates would land on a later opening of the modal.
pub fn plan_settlement(still_mounted: bool, outcome: &SaveOutcome) -> Vec<ModalEffect> {
    let effects = plan_effects(outcome);
    if still_mounted {
        return effects;
    }
    effects
        .into_iter()
        .filter(|effect| matches!(effect, ModalEffect::NotifySaved(_)))
        .collect()
}

fn submit_error_message(error: &KidRegisterError) -> String {
    match error {
        KidRegisterError::Validation(_) => "Revisa los campos marcados".to_string(),
        KidRegisterError::Network(_) => {
            "No se pudo conectar con el servidor. Intenta de nuevo.".to_string()
        }
        KidRegisterError::Server { status, .. } => {
            format!("El servidor respondió con un error ({}). Intenta de nuevo.", status)
        }
        KidRegisterError::Decode(_) => "Respuesta inesperada del servidor.".to_string(),
        KidRegisterError::InvalidRequest(message) => {
            format!("No se pudo enviar el formulario: {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::register_kid_store::RegisterKidState;

    fn existing_kid() -> Kid {
        Kid {
            id: "kid-9".to_string(),
            identification: "123".to_string(),
            name: "Sofía".to_string(),
            lastname: "Ruiz".to_string(),
            date_born: "2020-02-29".to_string(),
            parent_name: "Marta".to_string(),
            parent_lastname: "Ruiz".to_string(),
            parent_email: "marta@example.com".to_string(),
            parent_phone: "555-0101".to_string(),
        }
    }

    fn name_errors() -> KidFormErrors {
        let mut errors = KidFormErrors::new();
        errors.insert(KidField::Name, "Obligatorio");
        errors
    }

    fn apply(state: Rc<RegisterKidState>, effects: &[ModalEffect]) -> Rc<RegisterKidState> {
        effects
            .iter()
            .filter_map(ModalEffect::store_action)
            .fold(state, |state, action| state.reduce(action))
    }

    fn set(form: Rc<KidFormState>, name: &str, value: &str) -> Rc<KidFormState> {
        let action = KidFormAction::from_input(name, value.to_string()).unwrap();
        form.reduce(action)
    }

    #[test]
    fn test_existing_id_takes_update_path() {
        let kid = existing_kid();
        let form = Kid::seeded_from(Some(&kid));
        assert_eq!(SubmitAction::choose(Some(&kid), &form), SubmitAction::Update(form));
    }

    #[test]
    fn test_missing_kid_takes_create_path() {
        let form = Kid::seeded_from(None);
        assert_eq!(SubmitAction::choose(None, &form), SubmitAction::Create(form));
    }

    #[test]
    fn test_empty_id_takes_create_path() {
        let kid = Kid {
            id: String::new(),
            ..existing_kid()
        };
        let form = Kid::seeded_from(Some(&kid));
        assert!(matches!(SubmitAction::choose(Some(&kid), &form), SubmitAction::Create(_)));
    }

    #[test]
    fn test_submit_sends_current_form_state() {
        let kid = existing_kid();
        let form = set(Rc::new(KidFormState::seeded_from(Some(&kid))), "parent_phone", "555-0199");
        match SubmitAction::choose(Some(&kid), &form.kid) {
            SubmitAction::Update(sent) => assert_eq!(sent.parent_phone, "555-0199"),
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_name_change_updates_only_name() {
        let before = Rc::new(KidFormState::seeded_from(Some(&existing_kid())));
        let after = set(before.clone(), "name", "Ana");

        assert_eq!(after.kid.name, "Ana");
        assert_eq!(after.kid.id, before.kid.id);
        for field in KidField::ALL.into_iter().filter(|f| *f != KidField::Name) {
            assert_eq!(after.kid.field(field), before.kid.field(field));
        }
    }

    #[test]
    fn test_back_to_back_changes_all_stick() {
        // Autofill fires several input events before the next render
        let form = Rc::new(KidFormState::seeded_from(None));
        let form = set(form, "parent_name", "Lucía");
        let form = set(form, "parent_email", "lucia@example.com");
        let form = set(form, "parent_phone", "3001234567");

        assert_eq!(form.kid.parent_name, "Lucía");
        assert_eq!(form.kid.parent_email, "lucia@example.com");
        assert_eq!(form.kid.parent_phone, "3001234567");
    }

    #[test]
    fn test_unknown_input_name_is_ignored() {
        assert_eq!(KidFormAction::from_input("id", "hijack".to_string()), None);
    }

    #[test]
    fn test_success_notifies_once_then_closes() {
        let saved = existing_kid();
        let effects = plan_effects(&Ok(saved.clone()));
        let notified: Vec<_> = effects
            .iter()
            .filter(|e| matches!(e, ModalEffect::NotifySaved(_)))
            .collect();
        assert_eq!(notified, vec![&ModalEffect::NotifySaved(saved)]);

        let open = Rc::new(RegisterKidState::default()).reduce(RegisterKidAction::OpenRegister);
        let state = apply(open, &effects);
        assert!(!state.gonna_register_new_kid);
        assert!(!state.gonna_edit_kid);
    }

    #[test]
    fn test_validation_failure_publishes_errors_and_stays_open() {
        let effects = plan_effects(&Err(KidRegisterError::Validation(name_errors())));
        assert_eq!(effects, vec![ModalEffect::PublishErrors(name_errors())]);

        let open = Rc::new(RegisterKidState::default()).reduce(RegisterKidAction::OpenRegister);
        let state = apply(open, &effects);
        assert!(state.gonna_register_new_kid);
        assert_eq!(state.form_errors, Some(name_errors()));
    }

    #[test]
    fn test_transport_failure_shows_banner_without_closing() {
        let effects = plan_effects(&Err(KidRegisterError::Server {
            status: 502,
            message: "Bad gateway".to_string(),
        }));
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], ModalEffect::ShowSubmitError(msg) if msg.contains("502")));
        assert!(effects.iter().all(|e| e.store_action().is_none()));
    }

    #[test]
    fn test_rejection_after_close_does_not_reach_next_opening() {
        let state = Rc::new(RegisterKidState::default())
            .reduce(RegisterKidAction::OpenRegister)
            .reduce(RegisterKidAction::Close)
            .reduce(RegisterKidAction::ClearFormErrors);

        let late = plan_settlement(false, &Err(KidRegisterError::Validation(name_errors())));
        let state = apply(state, &late).reduce(RegisterKidAction::OpenRegister);

        assert!(state.gonna_register_new_kid);
        assert_eq!(state.form_errors, None);
    }

    #[test]
    fn test_success_after_close_keeps_reopened_modal_open() {
        let saved = existing_kid();
        let state = Rc::new(RegisterKidState::default())
            .reduce(RegisterKidAction::OpenRegister)
            .reduce(RegisterKidAction::Close)
            .reduce(RegisterKidAction::OpenEdit(saved.clone()));

        let late = plan_settlement(false, &Ok(saved.clone()));
        assert_eq!(late, vec![ModalEffect::NotifySaved(saved)]);

        let state = apply(state, &late);
        assert!(state.gonna_edit_kid);
    }

    #[test]
    fn test_mounted_settlement_is_unfiltered() {
        let outcome: SaveOutcome = Err(KidRegisterError::Validation(name_errors()));
        assert_eq!(plan_settlement(true, &outcome), plan_effects(&outcome));
    }
}
