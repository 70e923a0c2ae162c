//! Widget kinds, their dialog fields and the renderer dispatch.

pub(crate) mod dialog;
pub(crate) mod dialog_fields;
pub(crate) mod jira_buckets;
mod renderer;

pub(crate) use dialog::WidgetDialog;
pub(crate) use renderer::WidgetBody;

use crate::models::ToDoItem;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Closed set of widget kinds known to the dashboard.
///
/// The variant name is the backend `type` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub(crate) enum WidgetKind {
    DefaultWidget,
    ExampleWidget,
    JenkinsJobWidget,
    SonarQubeWidget,
    ServiceCheckWidget,
    BambooPlanWidget,
    IFrameEmbedWidget,
    CheckboxWidget,
    JiraBucketsWidget,
    ToDoListWidget,
}

impl WidgetKind {
    /// Unknown or empty type strings fall back to the default widget.
    pub fn from_type(widget_type: &str) -> Self {
        let t = widget_type.trim();
        Self::iter()
            .find(|k| k.as_ref() == t)
            .unwrap_or(WidgetKind::DefaultWidget)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WidgetKind::DefaultWidget => "Default",
            WidgetKind::ExampleWidget => "Example widget",
            WidgetKind::JenkinsJobWidget => "Jenkins Job widget",
            WidgetKind::SonarQubeWidget => "SonarQube widget",
            WidgetKind::ServiceCheckWidget => "Service Check widget",
            WidgetKind::BambooPlanWidget => "Bamboo Plan widget",
            WidgetKind::IFrameEmbedWidget => "IFrame Embed widget",
            WidgetKind::CheckboxWidget => "Checkbox widget",
            WidgetKind::JiraBucketsWidget => "Jira Buckets widget",
            WidgetKind::ToDoListWidget => "To Do List widget",
        }
    }

    /// Fields shown in the add/edit dialog, in display order.
    pub fn dialog_fields(self) -> &'static [DialogField] {
        use DialogField::*;
        match self {
            WidgetKind::DefaultWidget | WidgetKind::CheckboxWidget => &[],
            WidgetKind::ExampleWidget => &[SchedulePeriod, Range],
            WidgetKind::JenkinsJobWidget => &[EndpointField, SchedulePeriod, Path],
            WidgetKind::SonarQubeWidget => &[
                EndpointField,
                SchedulePeriod,
                Key,
                IdNumber,
                SonarQubeMetricsInput,
            ],
            WidgetKind::ServiceCheckWidget => &[SchedulePeriod, Url, StatusCode],
            WidgetKind::BambooPlanWidget => &[EndpointField, SchedulePeriod, IdString],
            WidgetKind::IFrameEmbedWidget => &[UrlForContent],
            WidgetKind::JiraBucketsWidget => &[EndpointField, SchedulePeriod],
            WidgetKind::ToDoListWidget => &[ToDoListItems],
        }
    }
}

/// Input controls available in the widget dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub(crate) enum DialogField {
    EndpointField,
    SchedulePeriod,
    Path,
    Key,
    IdNumber,
    SonarQubeMetricsInput,
    #[strum(serialize = "URL")]
    Url,
    StatusCode,
    IdString,
    UrlForContent,
    Range,
    ToDoListItems,
}

/// How a field is edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldInput {
    Text,
    Number,
    Range,
    ToDoList,
}

impl DialogField {
    /// Key under which the value is stored in the widget configuration.
    pub fn key(self) -> &'static str {
        match self {
            DialogField::EndpointField => "endpoint",
            DialogField::SchedulePeriod => "schedulePeriod",
            DialogField::Path => "path",
            DialogField::Key => "key",
            DialogField::IdNumber => "idNumber",
            DialogField::SonarQubeMetricsInput => "selectedMetrics",
            DialogField::Url => "url",
            DialogField::StatusCode => "expectedStatusCode",
            DialogField::IdString => "idString",
            DialogField::UrlForContent => "iframeUrl",
            DialogField::Range => "range",
            DialogField::ToDoListItems => "toDoListItems",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DialogField::EndpointField => "Endpoint",
            DialogField::SchedulePeriod => "Schedule Period [sec]",
            DialogField::Path => "Path",
            DialogField::Key => "Key",
            DialogField::IdNumber => "ID",
            DialogField::SonarQubeMetricsInput => "Metrics",
            DialogField::Url => "URL",
            DialogField::StatusCode => "Expected Status Code",
            DialogField::IdString => "ID",
            DialogField::UrlForContent => "URL",
            DialogField::Range => "Range (%)",
            DialogField::ToDoListItems => "To Do List",
        }
    }

    pub fn input(self) -> FieldInput {
        match self {
            DialogField::SchedulePeriod | DialogField::IdNumber | DialogField::StatusCode => {
                FieldInput::Number
            }
            DialogField::Range => FieldInput::Range,
            DialogField::ToDoListItems => FieldInput::ToDoList,
            _ => FieldInput::Text,
        }
    }
}

/// Value carried by a field change.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FieldValue {
    Text(String),
    Number(i64),
    Range(u8, u8),
    List(Vec<ToDoItem>),
}

/// "Field changed" notification sent from a dialog control to the embedding form.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldChange {
    pub field: DialogField,
    pub value: FieldValue,
}

impl FieldChange {
    /// The to-do list editor always reports its complete list.
    pub fn list(items: Vec<ToDoItem>) -> Self {
        Self {
            field: DialogField::ToDoListItems,
            value: FieldValue::List(items),
        }
    }
}
