use crate::components::hooks::use_field_id::use_field_id;
use crate::components::ui::Label;
use crate::widgets::{DialogField, FieldChange, FieldValue};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub(crate) const DEFAULT_RANGE: (u8, u8) = (57, 80);
const MARKS: [u8; 2] = [0, 100];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Thumb {
    Low,
    High,
}

pub(crate) fn value_text(value: u8) -> String {
    format!("{value}%")
}

/// Move one thumb; it stops at the other thumb and at 0..=100.
pub(crate) fn move_thumb(current: (u8, u8), thumb: Thumb, value: u8) -> (u8, u8) {
    let value = value.min(100);
    match thumb {
        Thumb::Low => (value.min(current.1), current.1),
        Thumb::High => (current.0, value.max(current.0)),
    }
}

/// Saved `[low, high]` pair, or the default when missing or malformed.
pub(crate) fn range_from_json(v: Option<&serde_json::Value>) -> (u8, u8) {
    let pair = v.and_then(|v| v.as_array()).and_then(|a| match a.as_slice() {
        [low, high] => Some((low.as_u64()?, high.as_u64()?)),
        _ => None,
    });

    match pair {
        Some((low, high)) if low <= high && high <= 100 => (low as u8, high as u8),
        _ => DEFAULT_RANGE,
    }
}

fn input_value(ev: &web_sys::Event) -> Option<u8> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.value().parse::<u8>().ok()
}

#[component]
pub fn RangeSlider(
    #[prop(into)] initial: (u8, u8),
    on_change: Callback<FieldChange>,
) -> impl IntoView {
    let id = use_field_id(DialogField::Range.key());
    let range: RwSignal<(u8, u8)> = RwSignal::new(initial);

    let on_thumb = move |thumb: Thumb, ev: web_sys::Event| {
        let Some(v) = input_value(&ev) else {
            return;
        };
        let next = move_thumb(range.get_untracked(), thumb, v);
        if next != range.get_untracked() {
            range.set(next);
            on_change.run(FieldChange {
                field: DialogField::Range,
                value: FieldValue::Range(next.0, next.1),
            });
        }
    };

    view! {
        <div class="flex flex-col gap-2" data-cy="range-slider">
            <Label html_for=id.clone() shrink=true>{DialogField::Range.label()}</Label>
            <div class="relative flex flex-col gap-1">
                <input
                    id=id
                    type="range"
                    min="0"
                    max="100"
                    aria-valuetext=move || value_text(range.get().0)
                    prop:value=move || range.get().0.to_string()
                    on:input=move |ev| on_thumb(Thumb::Low, ev)
                />
                <input
                    type="range"
                    min="0"
                    max="100"
                    aria-valuetext=move || value_text(range.get().1)
                    prop:value=move || range.get().1.to_string()
                    on:input=move |ev| on_thumb(Thumb::High, ev)
                />
                <div class="flex justify-between text-xs text-muted-foreground">
                    {MARKS.iter().map(|m| view! { <span>{value_text(*m)}</span> }).collect_view()}
                </div>
                <div class="text-xs">
                    {move || {
                        let (low, high) = range.get();
                        format!("{} – {}", value_text(low), value_text(high))
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(57), "57%");
    }

    #[test]
    fn test_thumbs_cannot_cross() {
        assert_eq!(move_thumb((57, 80), Thumb::Low, 90), (80, 80));
        assert_eq!(move_thumb((57, 80), Thumb::High, 10), (57, 57));
        assert_eq!(move_thumb((57, 80), Thumb::Low, 20), (20, 80));
        assert_eq!(move_thumb((57, 80), Thumb::High, 250), (57, 100));
    }

    #[test]
    fn test_range_from_json() {
        assert_eq!(range_from_json(None), DEFAULT_RANGE);
        assert_eq!(range_from_json(Some(&serde_json::json!([10, 20]))), (10, 20));
        assert_eq!(range_from_json(Some(&serde_json::json!([30, 20]))), DEFAULT_RANGE);
        assert_eq!(range_from_json(Some(&serde_json::json!([10, 200]))), DEFAULT_RANGE);
        assert_eq!(range_from_json(Some(&serde_json::json!("10-20"))), DEFAULT_RANGE);
    }
}
