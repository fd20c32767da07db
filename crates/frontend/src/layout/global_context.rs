use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::shared::session;

/// Default page shown when the URL carries no `active` key.
pub const DEFAULT_PAGE: &str = "a001_warehouse";

/// Operator session restored from localStorage. Token issuance is owned by
/// the surrounding platform; this shell only carries what it finds.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub operator: Option<String>,
}

/// Application-wide UI state, provided via context (no module singletons).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the active page (sidebar selection).
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    pub session: RwSignal<SessionState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
            session: RwSignal::new(SessionState {
                access_token: session::get_access_token(),
                operator: session::get_operator(),
            }),
        }
    }

    pub fn activate(&self, key: &str) {
        self.active.set(key.to_string());
    }

    /// Sync the active page with the `?active=` query parameter: restore
    /// it on startup, mirror changes back via `history.replaceState`.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            if !active_key.is_empty() {
                self.active.set(active_key.clone());
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key,
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            // Only touch the history when the URL actually changed.
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
