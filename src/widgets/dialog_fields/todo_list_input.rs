use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input};
use crate::models::{ToDoItem, WidgetFormValues};
use crate::state::AppContext;
use crate::todo::{run_effects, ApiSyncGateway, Effects, ToDoListEditor};
use crate::widgets::FieldChange;
use icons::{Check, Pencil, Plus, Trash2};
use leptos::prelude::*;

/// One rendered row: position, item, done flag, being edited.
type RowView = (usize, ToDoItem, bool, bool);

/// Copyable bundle of the editor and everything its actions need.
#[derive(Clone, Copy)]
struct ListHandle {
    editor: StoredValue<ToDoListEditor>,
    gateway: StoredValue<ApiSyncGateway>,
    revision: RwSignal<u64>,
    composer: RwSignal<String>,
    drag_from: RwSignal<Option<usize>>,
    on_change: Callback<FieldChange>,
}

impl ListHandle {
    /// Run one editor action, then deliver its effects outside the editor borrow.
    ///
    /// Returns whether the action produced any effect.
    fn apply(self, f: impl FnOnce(&mut ToDoListEditor) -> Effects) -> bool {
        let Some((effects, session_ended)) = self.editor.try_update_value(|e| {
            let was_editing = !e.session().is_idle();
            let effects = f(e);
            (effects, was_editing && e.session().is_idle())
        }) else {
            return false;
        };

        if session_ended {
            self.composer.set(String::new());
        }
        self.revision.update(|r| *r += 1);

        let changed = !effects.is_empty();
        let gateway = self.gateway.get_value();
        run_effects(effects, &gateway, |c| self.on_change.run(c));
        changed
    }

    fn save(self) {
        let text = self.composer.get_untracked();
        if self.apply(|e| e.save(&text)) {
            self.composer.set(String::new());
        }
    }

    fn edit(self, id: &str) {
        let text = self.editor.try_update_value(|e| e.start_edit(id)).flatten();
        if let Some(text) = text {
            self.composer.set(text);
            self.revision.update(|r| *r += 1);
        }
    }

    fn rows(self) -> Vec<RowView> {
        self.revision.track();
        self.editor.with_value(|e| {
            e.items()
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    (
                        i,
                        item.clone(),
                        e.is_selected(&item.id),
                        e.session().is_editing(&item.id),
                    )
                })
                .collect()
        })
    }

    fn is_editing(self) -> bool {
        self.revision.track();
        self.editor.with_value(|e| !e.session().is_idle())
    }

    fn can_clear(self) -> bool {
        self.revision.track();
        self.editor.with_value(|e| e.can_clear())
    }
}

fn drag_index(ev: &web_sys::DragEvent) -> Option<usize> {
    ev.data_transfer()
        .and_then(|dt| dt.get_data("text/plain").ok())
        .and_then(|s| s.trim().parse::<usize>().ok())
}

#[component]
fn ToDoListRow(handle: ListHandle, row: RowView) -> impl IntoView {
    let (index, item, selected, editing) = row;
    let item_id = item.id.clone();
    let text_class = if selected {
        "flex-1 truncate line-through text-muted-foreground"
    } else {
        "flex-1 truncate"
    };

    view! {
        <li
            class="flex cursor-pointer items-center gap-2 rounded-md border px-2 py-1 bg-background"
            data-item-id=item.id.clone()
            draggable="true"
            // Clicking anywhere on the row, the pencil included, edits the item.
            on:click=move |_| handle.edit(&item_id)
            on:dragstart=move |ev: web_sys::DragEvent| {
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &index.to_string());
                    dt.set_drop_effect("move");
                }
                handle.drag_from.set(Some(index));
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                if let Some(dt) = ev.data_transfer() {
                    dt.set_drop_effect("move");
                }
            }
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                let from = drag_index(&ev).or_else(|| handle.drag_from.get_untracked());
                handle.drag_from.set(None);
                if let Some(from) = from {
                    handle.apply(|e| e.reorder(from, Some(index)));
                }
            }
            on:dragend=move |_ev: web_sys::DragEvent| {
                // Still set only when no row accepted the drop.
                if let Some(from) = handle.drag_from.get_untracked() {
                    handle.drag_from.set(None);
                    handle.apply(|e| e.reorder(from, None));
                }
            }
        >
            <span class=text_class>{item.text.clone()}</span>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:aria-label="Edit"
                attr:disabled=editing
            >
                <Pencil />
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:aria-label="Delete"
                attr:disabled=editing
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    handle.apply(|e| e.delete(index));
                }
            >
                <Trash2 />
            </Button>
        </li>
    }
}

/// Editable, reorderable to-do list inside the widget dialog.
///
/// `value` seeds the list once; `values` is the live form, read for the widget id
/// and the items currently marked done.
#[component]
pub fn ToDoListInput(
    value: Vec<ToDoItem>,
    #[prop(into)] values: Signal<WidgetFormValues>,
    on_change: Callback<FieldChange>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let handle = ListHandle {
        editor: StoredValue::new(ToDoListEditor::new(value, values.get_untracked())),
        gateway: StoredValue::new(ApiSyncGateway::new(app_state)),
        revision: RwSignal::new(0),
        composer: RwSignal::new(String::new()),
        drag_from: RwSignal::new(None),
        on_change,
    };

    Effect::new(move |_| {
        let form = values.get();
        handle.editor.update_value(|e| e.set_form_values(form));
        handle.revision.update(|r| *r += 1);
    });

    view! {
        <div class="flex flex-col gap-3">
            <Input
                data_cy="item-text"
                placeholder="Item Title"
                bind_value=handle.composer
                on_enter=Callback::new(move |_| handle.save())
            />
            <div class="flex items-center gap-2">
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Pill
                    attr:data-cy="add-item"
                    attr:aria-label="add"
                    on:click=move |_| handle.save()
                >
                    <Show
                        when=move || handle.is_editing()
                        fallback=|| view! { <Plus /> "Add Item" }
                    >
                        <Check />
                        "Save item"
                    </Show>
                </Button>
                <Show when=move || handle.can_clear()>
                    <Button
                        variant=ButtonVariant::Destructive
                        size=ButtonSize::Pill
                        attr:data-cy="clear-selected-items"
                        attr:aria-label="clear selected items"
                        on:click=move |_| {
                            handle.apply(|e| e.clear_selected());
                        }
                    >
                        <Trash2 />
                        "Clear Selected"
                    </Button>
                </Show>
            </div>
            <ul class="flex flex-col gap-1">
                {move || {
                    handle
                        .rows()
                        .into_iter()
                        .map(|row| view! { <ToDoListRow handle=handle row=row /> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
