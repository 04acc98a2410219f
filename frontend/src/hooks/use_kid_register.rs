use shared::{Kid, KidFormErrors, KidRegisterError, SaveOutcome};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::store::register_kid_store::{use_register_kid_store, RegisterKidAction, RegisterKidState};

const COMPONENT: &str = "use_kid_register";

/// Save operations for the register/edit kid modal, bound to the shared store
///
/// Saves only report their outcome; the caller decides which store updates
/// still apply once the request settles.
#[derive(Clone)]
pub struct KidRegister {
    /// Field errors from the last rejected save
    pub errors: Option<KidFormErrors>,
    api_client: ApiClient,
    dispatcher: UseReducerDispatcher<RegisterKidState>,
}

impl KidRegister {
    pub async fn save_new_kid(&self, kid: Kid) -> SaveOutcome {
        Logger::debug_with_component(COMPONENT, "Creating kid");
        let outcome = self.api_client.create_kid(&kid).await;
        log_outcome("create", &outcome);
        outcome
    }

    pub async fn update_kid(&self, kid: Kid) -> SaveOutcome {
        Logger::debug_with_component(COMPONENT, &format!("Updating kid {}", kid.id));
        let outcome = self.api_client.update_kid(&kid).await;
        log_outcome("update", &outcome);
        outcome
    }

    pub fn dispatch(&self, action: RegisterKidAction) {
        self.dispatcher.dispatch(action);
    }

    /// Clear both modal flags
    pub fn close(&self) {
        self.dispatch(RegisterKidAction::Close);
    }

    pub fn clear_errors(&self) {
        self.dispatch(RegisterKidAction::ClearFormErrors);
    }
}

fn log_outcome(operation: &str, outcome: &SaveOutcome) {
    match outcome {
        Ok(kid) => Logger::info_with_component(
            COMPONENT,
            &format!("Kid {} saved ({})", kid.id, operation),
        ),
        Err(KidRegisterError::Validation(errors)) => Logger::warn_with_component(
            COMPONENT,
            &format!("Kid {} rejected: {} field error(s)", operation, errors.len()),
        ),
        Err(e) => Logger::error_with_component(
            COMPONENT,
            &format!("Kid {} failed: {}", operation, e),
        ),
    }
}

#[hook]
pub fn use_kid_register(api_client: &ApiClient) -> KidRegister {
    let store = use_register_kid_store();

    KidRegister {
        errors: store.form_errors.clone(),
        api_client: api_client.clone(),
        dispatcher: store.dispatcher(),
    }
}
