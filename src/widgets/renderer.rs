use crate::components::board::NoItemsInfo;
use crate::models::{ToDoItem, WidgetFormValues};
use crate::widgets::dialog_fields::range_slider::{range_from_json, value_text};
use crate::widgets::jira_buckets::JiraBucketsWidget;
use crate::widgets::{DialogField, FieldInput, WidgetKind};
use leptos::prelude::*;

/// Items of a to-do widget with their "done" flag.
pub(crate) fn todo_rows(values: &WidgetFormValues) -> Vec<(ToDoItem, bool)> {
    let selected = &values.content.selected_items;
    values
        .to_do_list_items
        .iter()
        .flatten()
        .map(|item| (item.clone(), selected.contains(&item.id)))
        .collect()
}

/// Label/value pairs of the configured fields, skipping empty ones.
pub(crate) fn summary_rows(values: &WidgetFormValues) -> Vec<(&'static str, String)> {
    WidgetKind::from_type(&values.widget_type)
        .dialog_fields()
        .iter()
        .filter_map(|field| {
            let text = match field.input() {
                FieldInput::ToDoList => return None,
                FieldInput::Range => {
                    let (low, high) = range_from_json(values.extra.get(field.key()));
                    format!("{} – {}", value_text(low), value_text(high))
                }
                FieldInput::Text | FieldInput::Number => values.field_text(*field),
            };
            (!text.trim().is_empty()).then_some((field.label(), text))
        })
        .collect()
}

#[component]
fn ToDoListBody(values: Signal<WidgetFormValues>) -> impl IntoView {
    move || {
        let rows = values.with(todo_rows);
        if rows.is_empty() {
            return view! { <NoItemsInfo message="To Do List Empty" /> }.into_any();
        }

        view! {
            <ul class="flex flex-col gap-1 text-sm">
                {rows
                    .into_iter()
                    .map(|(item, done)| {
                        let class = if done { "line-through text-muted-foreground" } else { "" };
                        view! {
                            <li data-item-id=item.id class=class>
                                {item.text}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    }
}

#[component]
fn IFrameBody(values: Signal<WidgetFormValues>) -> impl IntoView {
    move || {
        let url = values.with(|v| v.field_text(DialogField::UrlForContent));
        if url.trim().is_empty() {
            return view! { <NoItemsInfo message="No URL configured" /> }.into_any();
        }
        view! { <iframe class="h-full w-full border-0" src=url title="embedded content" /> }
            .into_any()
    }
}

#[component]
fn SummaryBody(values: Signal<WidgetFormValues>) -> impl IntoView {
    move || {
        let rows = values.with(summary_rows);
        if rows.is_empty() {
            return view! { <NoItemsInfo message="Nothing configured" /> }.into_any();
        }

        view! {
            <dl class="grid grid-cols-[auto_1fr] gap-x-3 gap-y-1 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, text)| {
                        view! {
                            <dt class="text-muted-foreground">{label}</dt>
                            <dd class="truncate">{text}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        }
        .into_any()
    }
}

/// Widget content, dispatched on the widget type.
#[component]
pub fn WidgetBody(#[prop(into)] values: Signal<WidgetFormValues>) -> impl IntoView {
    move || match WidgetKind::from_type(&values.with(|v| v.widget_type.clone())) {
        WidgetKind::JiraBucketsWidget => {
            let buckets = Signal::derive(move || values.with(|v| v.content.buckets.clone()));
            view! { <JiraBucketsWidget buckets=buckets /> }.into_any()
        }
        WidgetKind::ToDoListWidget => view! { <ToDoListBody values=values /> }.into_any(),
        WidgetKind::IFrameEmbedWidget => view! { <IFrameBody values=values /> }.into_any(),
        _ => view! { <SummaryBody values=values /> }.into_any(),
    }
}
