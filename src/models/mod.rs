use crate::widgets::{DialogField, FieldChange, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a to-do list widget.
///
/// The backend stores the label under `itemText`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ToDoItem {
    pub id: String,

    #[serde(rename = "itemText")]
    pub text: String,
}

impl ToDoItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Live content pushed by the backend for a widget.
///
/// Only the fields the front-end interprets are typed; the rest is kept verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct WidgetContent {
    /// Ids of to-do items marked as done.
    #[serde(rename = "selectedItems", default)]
    pub selected_items: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<JiraBucket>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Full configuration of a widget, as edited in the widget dialog and persisted on save.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct WidgetFormValues {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "type", default)]
    pub widget_type: String,

    #[serde(default)]
    pub content: WidgetContent,

    #[serde(rename = "toDoListItems", default, skip_serializing_if = "Option::is_none")]
    pub to_do_list_items: Option<Vec<ToDoItem>>,

    /// Dialog field values the front-end does not interpret (endpoint, schedule period, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WidgetFormValues {
    /// Fold a dialog field change into the form values.
    pub fn apply(&mut self, change: FieldChange) {
        match change.value {
            FieldValue::List(items) => self.to_do_list_items = Some(items),
            FieldValue::Text(s) => {
                self.extra
                    .insert(change.field.key().to_string(), serde_json::Value::String(s));
            }
            FieldValue::Number(n) => {
                self.extra
                    .insert(change.field.key().to_string(), serde_json::Value::from(n));
            }
            FieldValue::Range(low, high) => {
                self.extra.insert(
                    change.field.key().to_string(),
                    serde_json::json!([low, high]),
                );
            }
        }
    }

    /// Current raw value of a free-form dialog field, rendered as text for an input.
    pub fn field_text(&self, field: DialogField) -> String {
        match self.extra.get(field.key()) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(v) => v.to_string(),
        }
    }
}

/// A Jira bucket row as delivered in the widget content.
///
/// Thresholds arrive as strings or numbers depending on how the widget was configured.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct JiraBucket {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub url: String,

    #[serde(rename = "issueCounts", default)]
    pub issue_counts: i64,

    #[serde(rename = "errorThreshold", default)]
    pub error_threshold: serde_json::Value,

    #[serde(rename = "warningThreshold", default)]
    pub warning_threshold: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Board {
    pub id: String,
    pub title: String,

    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Widget ids in display order.
    #[serde(default)]
    pub widgets: Vec<String>,
}

fn default_columns() -> u32 {
    4
}

/// Dashboard configuration served by `GET /api/config`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub(crate) struct DashboardConfig {
    #[serde(default)]
    pub boards: Vec<Board>,

    /// widget id -> values
    #[serde(default)]
    pub widgets: HashMap<String, WidgetFormValues>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_item_uses_item_text_key() {
        let item = ToDoItem::new("item-1", "Buy milk");
        let v = serde_json::to_value(&item).expect("should serialize");
        assert_eq!(v["id"], "item-1");
        assert_eq!(v["itemText"], "Buy milk");
        assert!(v.get("text").is_none());
    }

    #[test]
    fn test_widget_form_values_keep_unknown_fields() {
        let json = r#"{
            "id": "widget7",
            "title": "Chores",
            "type": "ToDoListWidget",
            "schedulePeriod": 120,
            "content": {"selectedItems": ["item-b"], "widgetStatus": "OK"},
            "toDoListItems": [{"id": "item-a", "itemText": "x"}, {"id": "item-b", "itemText": "y"}]
        }"#;
        let parsed: WidgetFormValues = serde_json::from_str(json).expect("values should parse");
        assert_eq!(parsed.id, "widget7");
        assert_eq!(parsed.widget_type, "ToDoListWidget");
        assert_eq!(parsed.content.selected_items, vec!["item-b".to_string()]);
        assert_eq!(parsed.content.extra["widgetStatus"], "OK");
        assert_eq!(parsed.to_do_list_items.as_ref().map(|v| v.len()), Some(2));

        let back = serde_json::to_value(&parsed).expect("should serialize");
        assert_eq!(back["schedulePeriod"], 120);
        assert_eq!(back["toDoListItems"][1]["itemText"], "y");
    }

    #[test]
    fn test_widget_form_values_without_list_omit_key() {
        let values = WidgetFormValues {
            id: "w1".to_string(),
            ..Default::default()
        };
        let v = serde_json::to_value(&values).expect("should serialize");
        assert!(v.get("toDoListItems").is_none());
    }

    #[test]
    fn test_apply_list_change_replaces_items() {
        let mut values = WidgetFormValues::default();
        values.apply(FieldChange::list(vec![ToDoItem::new("a", "x")]));
        assert_eq!(values.to_do_list_items, Some(vec![ToDoItem::new("a", "x")]));

        // An emptied list is still persisted, as an empty array.
        values.apply(FieldChange::list(vec![]));
        let v = serde_json::to_value(&values).expect("should serialize");
        assert_eq!(v["toDoListItems"], serde_json::json!([]));
    }

    #[test]
    fn test_apply_text_and_range_changes() {
        let mut values = WidgetFormValues::default();
        values.apply(FieldChange {
            field: DialogField::Url,
            value: FieldValue::Text("https://status.example.com".to_string()),
        });
        values.apply(FieldChange {
            field: DialogField::SchedulePeriod,
            value: FieldValue::Number(60),
        });
        values.apply(FieldChange {
            field: DialogField::Range,
            value: FieldValue::Range(10, 90),
        });

        assert_eq!(values.field_text(DialogField::Url), "https://status.example.com");
        assert_eq!(values.field_text(DialogField::SchedulePeriod), "60");
        assert_eq!(values.extra["range"], serde_json::json!([10, 90]));
        assert_eq!(values.field_text(DialogField::Path), "");
    }

    #[test]
    fn test_board_columns_default() {
        let board: Board =
            serde_json::from_str(r#"{"id": "board-1", "title": "Main"}"#).expect("board should parse");
        assert_eq!(board.columns, 4);
        assert!(board.widgets.is_empty());
    }
}
