use shared::Kid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default)]
pub struct KidsState {
    pub kids: Vec<Kid>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseKidsResult {
    pub state: KidsState,
    pub actions: UseKidsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseKidsActions {
    pub refresh_kids: Callback<()>,
    /// Insert a saved kid, replacing any entry with the same id
    pub upsert_kid: Callback<Kid>,
}

/// Replace the kid with the same id, or append it
pub fn upsert_kid(kids: &[Kid], saved: Kid) -> Vec<Kid> {
    let mut next = kids.to_vec();
    match next.iter_mut().find(|kid| kid.is_existing() && kid.id == saved.id) {
        Some(slot) => *slot = saved,
        None => next.push(saved),
    }
    next
}

/// Hook for the registered kids roster
#[hook]
pub fn use_kids(api_client: &ApiClient) -> UseKidsResult {
    let kids = use_state(Vec::<Kid>::new);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let refresh_kids = {
        let api_client = api_client.clone();
        let kids = kids.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let kids = kids.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_kids().await {
                    Ok(list) => {
                        kids.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component("use_kids", &format!("Failed to load kids: {}", e));
                        error.set(Some("No se pudo cargar la lista de niños".to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    let upsert = {
        let kids = kids.clone();
        Callback::from(move |saved: Kid| {
            kids.set(upsert_kid(&kids, saved));
        })
    };

    // Load the roster on mount
    use_effect_with((), {
        let refresh_kids = refresh_kids.clone();
        move |_| {
            refresh_kids.emit(());
            || ()
        }
    });

    let state = KidsState {
        kids: (*kids).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseKidsActions {
        refresh_kids,
        upsert_kid: upsert,
    };

    UseKidsResult { state, actions }
}
