use crate::components::hooks::use_field_id::use_field_id;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Input, Label, Modal, ModalBody, ModalFooter, ModalHeader,
    ModalTitle,
};
use crate::models::WidgetFormValues;
use crate::state::{save_widget, AppContext};
use crate::widgets::dialog_fields::range_slider::range_from_json;
use crate::widgets::dialog_fields::{RangeSlider, TextInput, ToDoListInput};
use crate::widgets::{DialogField, FieldChange, FieldInput, WidgetKind};
use icons::Check;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Values the dialog starts from; a widget missing from the store gets blank values.
pub(crate) fn dialog_values(stored: Option<WidgetFormValues>, widget_id: &str) -> WidgetFormValues {
    let mut values = stored.unwrap_or_default();
    if values.id.is_empty() {
        values.id = widget_id.to_string();
    }
    values
}

#[component]
fn DialogFieldInput(
    field: DialogField,
    values: RwSignal<WidgetFormValues>,
    on_change: Callback<FieldChange>,
) -> impl IntoView {
    match field.input() {
        FieldInput::Text | FieldInput::Number => {
            let initial = values.with_untracked(|v| v.field_text(field));
            view! { <TextInput field=field initial=initial on_change=on_change /> }.into_any()
        }
        FieldInput::Range => {
            let initial = values.with_untracked(|v| range_from_json(v.extra.get(field.key())));
            view! { <RangeSlider initial=initial on_change=on_change /> }.into_any()
        }
        FieldInput::ToDoList => {
            let items = values.with_untracked(|v| v.to_do_list_items.clone().unwrap_or_default());
            view! { <ToDoListInput value=items values=values on_change=on_change /> }.into_any()
        }
    }
}

/// Dialog content; mounted fresh on every open so it starts from the stored values.
#[component]
fn WidgetDialogForm(widget_id: String, open: RwSignal<bool>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let values: RwSignal<WidgetFormValues> =
        RwSignal::new(dialog_values(app_state.0.widget(&widget_id), &widget_id));
    let title: RwSignal<String> = RwSignal::new(values.with_untracked(|v| v.title.clone()));
    let kind = WidgetKind::from_type(&values.with_untracked(|v| v.widget_type.clone()));
    let title_id = use_field_id("title");

    let on_change = Callback::new(move |change: FieldChange| {
        values.update(|v| v.apply(change));
    });

    let on_save = move || {
        let mut v = values.get_untracked();
        v.title = title.get_untracked().trim().to_string();
        save_widget(&app_state, v);
        open.set(false);
    };

    view! {
        <ModalHeader>
            <ModalTitle>"Edit widget"</ModalTitle>
            <p class="text-muted-foreground text-sm">{kind.display_name()}</p>
        </ModalHeader>
        <ModalBody>
            <div class="flex flex-col gap-2">
                <Label html_for=title_id.clone() shrink=true>"Title"</Label>
                <Input id=title_id data_cy="widget-title" bind_value=title />
            </div>
            {kind
                .dialog_fields()
                .iter()
                .map(|&field| {
                    view! { <DialogFieldInput field=field values=values on_change=on_change /> }
                })
                .collect_view()}
        </ModalBody>
        <ModalFooter>
            <Button variant=ButtonVariant::Outline on:click=move |_| open.set(false)>
                "Cancel"
            </Button>
            <Button
                size=ButtonSize::Default
                attr:data-cy="widget-form-submit"
                on:click=move |_| on_save()
            >
                <Check />
                "Save"
            </Button>
        </ModalFooter>
    }
}

/// Add/edit dialog of one widget; Escape closes it.
#[component]
pub fn WidgetDialog(#[prop(into)] widget_id: String, open: RwSignal<bool>) -> impl IntoView {
    let widget_id = StoredValue::new(widget_id);

    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            open.set(false);
        }
    });

    view! {
        <Modal open=open>
            <WidgetDialogForm widget_id=widget_id.get_value() open=open />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_values_keep_stored() {
        let stored = WidgetFormValues {
            id: "w1".to_string(),
            title: "Build".to_string(),
            ..Default::default()
        };
        let v = dialog_values(Some(stored.clone()), "w1");
        assert_eq!(v, stored);
    }

    #[test]
    fn test_dialog_values_for_missing_widget() {
        let v = dialog_values(None, "w9");
        assert_eq!(v.id, "w9");
        assert!(v.title.is_empty());
        assert_eq!(WidgetKind::from_type(&v.widget_type), WidgetKind::DefaultWidget);
    }
}
