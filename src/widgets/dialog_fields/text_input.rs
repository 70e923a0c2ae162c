use crate::components::hooks::use_field_id::use_field_id;
use crate::components::ui::{Input, Label};
use crate::widgets::{DialogField, FieldChange, FieldInput, FieldValue};
use leptos::prelude::*;

/// Change event for a free-form field. Number fields fall back to text while the
/// input does not hold an integer (e.g. mid-typing).
pub(crate) fn text_field_change(field: DialogField, raw: &str) -> FieldChange {
    let value = match field.input() {
        FieldInput::Number => match raw.trim().parse::<i64>() {
            Ok(n) => FieldValue::Number(n),
            Err(_) => FieldValue::Text(raw.to_string()),
        },
        _ => FieldValue::Text(raw.to_string()),
    };
    FieldChange { field, value }
}

#[component]
pub fn TextInput(
    field: DialogField,
    #[prop(into)] initial: String,
    on_change: Callback<FieldChange>,
) -> impl IntoView {
    let id = use_field_id(field.key());
    let value: RwSignal<String> = RwSignal::new(initial);
    let input_type = if field.input() == FieldInput::Number {
        "number"
    } else {
        "text"
    };

    // The first run only subscribes; later runs are user edits.
    Effect::new(move |subscribed: Option<bool>| {
        let v = value.get();
        if subscribed.is_some() {
            on_change.run(text_field_change(field, &v));
        }
        true
    });

    view! {
        <div class="flex flex-col gap-2">
            <Label html_for=id.clone() shrink=true>{field.label()}</Label>
            <Input id=id r#type=input_type data_cy=field.key() bind_value=value />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_field_parses_integer() {
        assert_eq!(
            text_field_change(DialogField::SchedulePeriod, " 60 ").value,
            FieldValue::Number(60)
        );
    }

    #[test]
    fn test_number_field_keeps_partial_text() {
        assert_eq!(
            text_field_change(DialogField::StatusCode, "2").value,
            FieldValue::Number(2)
        );
        assert_eq!(
            text_field_change(DialogField::StatusCode, "").value,
            FieldValue::Text(String::new())
        );
    }

    #[test]
    fn test_text_field_is_verbatim() {
        let change = text_field_change(DialogField::Path, "/job/build ");
        assert_eq!(change.field, DialogField::Path);
        assert_eq!(change.value, FieldValue::Text("/job/build ".to_string()));
    }
}
