use crate::api::{ApiClient, ApiError, ApiErrorKind};
use crate::models::{Board, WidgetFormValues};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// Loaded from `/api/config`.
    pub boards: RwSignal<Vec<Board>>,
    /// widget id -> persisted values
    pub widgets: RwSignal<HashMap<String, WidgetFormValues>>,

    pub config_loading: RwSignal<bool>,
    pub config_loaded: RwSignal<bool>,
    pub config_error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env()),
            boards: RwSignal::new(vec![]),
            widgets: RwSignal::new(HashMap::new()),
            config_loading: RwSignal::new(false),
            config_loaded: RwSignal::new(false),
            config_error: RwSignal::new(None),
        }
    }

    pub fn board(&self, board_id: &str) -> Option<Board> {
        self.boards
            .with(|boards| boards.iter().find(|b| b.id == board_id).cloned())
    }

    pub fn widget(&self, widget_id: &str) -> Option<WidgetFormValues> {
        self.widgets.with(|w| w.get(widget_id).cloned())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// Text shown in the board alert when the dashboard config cannot be loaded.
pub(crate) fn config_error_message(e: &ApiError) -> String {
    match e.kind {
        ApiErrorKind::Unauthorized => {
            "The dashboard API refused the request (unauthorized).".to_string()
        }
        ApiErrorKind::Network => format!("Cannot reach the dashboard API: {}", e.message),
        ApiErrorKind::Http | ApiErrorKind::Parse => e.to_string(),
    }
}

/// Fetch boards and widgets once; a load already in flight is not repeated.
pub(crate) fn load_dashboard(app_state: &AppContext) {
    if app_state.0.config_loading.get_untracked() {
        return;
    }

    app_state.0.config_loading.set(true);
    app_state.0.config_error.set(None);

    let api_client = app_state.0.api_client.get_untracked();
    let state = app_state.0.clone();
    spawn_local(async move {
        match api_client.get_config().await {
            Ok(config) => {
                leptos::logging::log!(
                    "[Board] loaded {} boards, {} widgets",
                    config.boards.len(),
                    config.widgets.len()
                );
                state.boards.set(config.boards);
                state.widgets.set(config.widgets);
                state.config_loaded.set(true);
            }
            Err(e) => {
                leptos::logging::error!("[Board] loading config failed: {}", e);
                state.config_error.set(Some(config_error_message(&e)));
            }
        }
        state.config_loading.set(false);
    });
}

/// Board-level widget save: the store is updated first, then the backend.
pub(crate) fn save_widget(app_state: &AppContext, values: WidgetFormValues) {
    if values.id.trim().is_empty() {
        leptos::logging::warn!("[Board] refusing to save a widget without id");
        return;
    }

    app_state.0.widgets.update(|w| {
        w.insert(values.id.clone(), values.clone());
    });

    let api_client = app_state.0.api_client.get_untracked();
    spawn_local(async move {
        match api_client.update_widget(&values).await {
            Ok(()) => leptos::logging::log!("[Board] saved widget {}", values.id),
            Err(e) => leptos::logging::warn!("[Board] saving widget {} failed: {}", values.id, e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(kind: ApiErrorKind, message: &str) -> ApiError {
        ApiError {
            kind,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_config_error_message_unauthorized() {
        let msg = config_error_message(&error(ApiErrorKind::Unauthorized, "Unauthorized"));
        assert!(msg.contains("unauthorized"));
    }

    #[test]
    fn test_config_error_message_network_names_cause() {
        let msg = config_error_message(&error(ApiErrorKind::Network, "connection refused"));
        assert_eq!(msg, "Cannot reach the dashboard API: connection refused");
    }

    #[test]
    fn test_config_error_message_http_keeps_details() {
        let msg = config_error_message(&error(ApiErrorKind::Http, "Request failed (500): boom"));
        assert_eq!(msg, "Request failed (500): boom");
    }
}
