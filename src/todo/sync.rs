use super::editor::{EditorEffect, Effects};
use crate::api::WidgetContentUpdateRequest;
use crate::models::WidgetFormValues;
use crate::state::{save_widget, AppContext};
use crate::widgets::FieldChange;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Content change the backend must apply to a to-do widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ContentUpdate {
    /// A done item was deleted; unmark it.
    ItemRemoved { widget_id: String, item_id: String },
    /// All done items were cleared.
    ClearItems { widget_id: String },
}

impl ContentUpdate {
    pub fn widget_id(&self) -> &str {
        match self {
            ContentUpdate::ItemRemoved { widget_id, .. } | ContentUpdate::ClearItems { widget_id } => {
                widget_id
            }
        }
    }

    pub fn to_request(&self) -> WidgetContentUpdateRequest {
        match self {
            ContentUpdate::ItemRemoved { widget_id, item_id } => WidgetContentUpdateRequest {
                id: widget_id.clone(),
                clear_items: None,
                selected_item: Some(item_id.clone()),
            },
            ContentUpdate::ClearItems { widget_id } => WidgetContentUpdateRequest {
                id: widget_id.clone(),
                clear_items: Some(true),
                selected_item: None,
            },
        }
    }
}

/// Remote side of the to-do editor.
///
/// Calls are fire-and-forget: local state already reflects the change and
/// results are not reported back.
pub(crate) trait SyncGateway {
    fn notify_content_update(&self, update: ContentUpdate);
    fn persist_widget(&self, values: WidgetFormValues);
}

/// Deliver editor effects: list changes to the form, the rest to the gateway.
pub(crate) fn run_effects<G: SyncGateway>(
    effects: Effects,
    gateway: &G,
    on_change: impl Fn(FieldChange),
) {
    for effect in effects {
        match effect {
            EditorEffect::ListChanged(items) => on_change(FieldChange::list(items)),
            EditorEffect::ContentUpdate(update) => gateway.notify_content_update(update),
            EditorEffect::PersistWidget(values) => gateway.persist_widget(values),
        }
    }
}

/// Gateway backed by the HTTP API and the global widget store.
#[derive(Clone)]
pub(crate) struct ApiSyncGateway {
    app_state: AppContext,
}

impl ApiSyncGateway {
    pub fn new(app_state: AppContext) -> Self {
        Self { app_state }
    }
}

impl SyncGateway for ApiSyncGateway {
    fn notify_content_update(&self, update: ContentUpdate) {
        let api_client = self.app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let req = update.to_request();
            match api_client.post_widget_content_update(&req).await {
                Ok(()) => leptos::logging::log!("[Sync] content update sent for {}", req.id),
                Err(e) => leptos::logging::warn!(
                    "[Sync] content update for {} failed: {}",
                    update.widget_id(),
                    e
                ),
            }
        });
    }

    fn persist_widget(&self, values: WidgetFormValues) {
        save_widget(&self.app_state, values);
    }
}
