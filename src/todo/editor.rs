use super::session::EditSession;
use super::store::ItemStore;
use super::sync::ContentUpdate;
use crate::models::{ToDoItem, WidgetFormValues};
use std::collections::HashSet;

/// Outbound work produced by an editor action.
///
/// Actions only compute these; the caller runs them once the editor is no
/// longer borrowed (see [`super::sync::run_effects`]).
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum EditorEffect {
    /// The full list changed; the embedding form must take it for its own save.
    ListChanged(Vec<ToDoItem>),
    ContentUpdate(ContentUpdate),
    /// Board-level save of the whole widget.
    PersistWidget(WidgetFormValues),
}

pub(crate) type Effects = Vec<EditorEffect>;

/// State behind the to-do list dialog field.
///
/// Owns the item list and the edit session. Selection (items marked done) belongs
/// to the widget content and is only read here.
#[derive(Clone, Debug)]
pub(crate) struct ToDoListEditor {
    store: ItemStore,
    session: EditSession,
    form: WidgetFormValues,
    selection: HashSet<String>,
}

impl ToDoListEditor {
    /// `value` seeds the list once; `form` carries the widget id and selection.
    pub fn new(value: Vec<ToDoItem>, form: WidgetFormValues) -> Self {
        let selection = selection_of(&form);
        Self {
            store: ItemStore::new(value),
            session: EditSession::Idle,
            form,
            selection,
        }
    }

    pub fn items(&self) -> &[ToDoItem] {
        self.store.items()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// "Clear selected" is offered only while something is selected.
    pub fn can_clear(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Refresh the parent's form values (new selection after a remote sync).
    ///
    /// The item list is not reseeded.
    pub fn set_form_values(&mut self, form: WidgetFormValues) {
        self.selection = selection_of(&form);
        self.form = form;
    }

    /// Enter edit mode for `id`, returning the text to load into the composer.
    pub fn start_edit(&mut self, id: &str) -> Option<String> {
        let text = self.store.get(id)?.text.clone();
        self.session = EditSession::Editing(id.to_string());
        Some(text)
    }

    /// Save the composer: update the edited item, or add a new one when idle.
    ///
    /// Blank text is ignored and leaves the session as it was.
    pub fn save(&mut self, text: &str) -> Effects {
        match self.session.clone() {
            EditSession::Editing(id) => {
                if !super::store::is_valid_text(text) {
                    return vec![];
                }
                let next = self.store.update(&id, text);
                // A vanished target still ends the session.
                self.session = EditSession::Idle;
                match next {
                    Some(items) => vec![EditorEffect::ListChanged(items)],
                    None => vec![],
                }
            }
            EditSession::Idle => match self.store.add(text) {
                Some(items) => vec![EditorEffect::ListChanged(items)],
                None => vec![],
            },
        }
    }

    /// Remove the item at `index`.
    ///
    /// Only the removal of an item marked done is pushed to the backend.
    pub fn delete(&mut self, index: usize) -> Effects {
        let Some((removed, items)) = self.store.delete(index) else {
            leptos::logging::warn!("[ToDoList] delete index {index} out of bounds");
            return vec![];
        };

        if self.session.is_editing(&removed.id) {
            self.session = EditSession::Idle;
        }

        let mut effects = vec![EditorEffect::ListChanged(items.clone())];
        if self.selection.contains(&removed.id) {
            effects.push(EditorEffect::ContentUpdate(ContentUpdate::ItemRemoved {
                widget_id: self.form.id.clone(),
                item_id: removed.id,
            }));
            effects.push(EditorEffect::PersistWidget(self.values_with(items)));
        }
        effects
    }

    /// Remove every selected item; always tells the backend to clear its selection.
    pub fn clear_selected(&mut self) -> Effects {
        let items = self.store.clear(&self.selection);

        if let Some(id) = self.session.editing_id() {
            if !self.store.contains(id) {
                self.session = EditSession::Idle;
            }
        }

        vec![
            EditorEffect::ListChanged(items.clone()),
            EditorEffect::ContentUpdate(ContentUpdate::ClearItems {
                widget_id: self.form.id.clone(),
            }),
            EditorEffect::PersistWidget(self.values_with(items)),
        ]
    }

    /// Drag-and-drop move. Local only; persisted with the next form save.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> Effects {
        match self.store.reorder(from, to) {
            Some(items) => vec![EditorEffect::ListChanged(items)],
            None => vec![],
        }
    }

    fn values_with(&self, items: Vec<ToDoItem>) -> WidgetFormValues {
        WidgetFormValues {
            to_do_list_items: Some(items),
            ..self.form.clone()
        }
    }
}

fn selection_of(form: &WidgetFormValues) -> HashSet<String> {
    form.content.selected_items.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WidgetContent;

    fn form(selected: &[&str]) -> WidgetFormValues {
        WidgetFormValues {
            id: "widget42".to_string(),
            title: "Chores".to_string(),
            widget_type: "ToDoListWidget".to_string(),
            content: WidgetContent {
                selected_items: selected.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn editor_xy(selected: &[&str]) -> ToDoListEditor {
        ToDoListEditor::new(
            vec![ToDoItem::new("A", "x"), ToDoItem::new("B", "y")],
            form(selected),
        )
    }

    fn syncs(effects: &Effects) -> usize {
        effects
            .iter()
            .filter(|e| !matches!(e, EditorEffect::ListChanged(_)))
            .count()
    }

    fn changed_list(effects: &Effects) -> Option<&Vec<ToDoItem>> {
        effects.iter().find_map(|e| match e {
            EditorEffect::ListChanged(items) => Some(items),
            _ => None,
        })
    }

    #[test]
    fn test_adds_report_full_list_and_unique_ids() {
        let mut editor = ToDoListEditor::new(vec![], form(&[]));
        for text in ["a", "b", "", "c", "  "] {
            let effects = editor.save(text);
            if text.trim().is_empty() {
                assert!(effects.is_empty());
            } else {
                assert_eq!(changed_list(&effects).map(|l| l.len()), Some(editor.items().len()));
                assert_eq!(syncs(&effects), 0);
            }
        }

        assert_eq!(editor.items().len(), 3);
        let ids: HashSet<&str> = editor.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_empty_add_changes_nothing() {
        let mut editor = editor_xy(&[]);
        assert!(editor.save("").is_empty());
        assert_eq!(editor.items().len(), 2);
        assert!(editor.session().is_idle());
    }

    #[test]
    fn test_start_edit_returns_current_text() {
        let mut editor = editor_xy(&[]);
        assert_eq!(editor.start_edit("B"), Some("y".to_string()));
        assert_eq!(editor.session(), &EditSession::Editing("B".to_string()));

        assert_eq!(editor.start_edit("missing"), None);
        assert_eq!(editor.session(), &EditSession::Editing("B".to_string()));
    }

    #[test]
    fn test_clicking_another_row_switches_edit_target() {
        let mut editor = editor_xy(&[]);
        assert_eq!(editor.start_edit("A"), Some("x".to_string()));
        assert_eq!(editor.start_edit("B"), Some("y".to_string()));
        assert!(editor.session().is_editing("B"));

        editor.save("y2");
        let texts: Vec<&str> = editor.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "y2"]);
    }

    #[test]
    fn test_click_on_deleted_row_is_ignored() {
        let mut editor = editor_xy(&[]);
        editor.delete(0);
        assert_eq!(editor.start_edit("A"), None);
        assert!(editor.session().is_idle());
    }

    #[test]
    fn test_edit_then_save_updates_in_place() {
        let mut editor = editor_xy(&[]);
        editor.start_edit("A");
        let effects = editor.save("x2");

        let list = changed_list(&effects).expect("list should change");
        assert_eq!(list[0], ToDoItem::new("A", "x2"));
        assert_eq!(list[1], ToDoItem::new("B", "y"));
        assert!(editor.session().is_idle());
        assert_eq!(syncs(&effects), 0);
    }

    #[test]
    fn test_edit_then_empty_save_keeps_session() {
        let mut editor = editor_xy(&[]);
        editor.start_edit("A");
        assert!(editor.save("").is_empty());
        assert_eq!(editor.session(), &EditSession::Editing("A".to_string()));
        assert_eq!(editor.items()[0], ToDoItem::new("A", "x"));
    }

    #[test]
    fn test_delete_selected_item_syncs() {
        let mut editor = editor_xy(&["B"]);
        let effects = editor.delete(1);

        assert_eq!(editor.items(), &[ToDoItem::new("A", "x")]);
        assert_eq!(
            effects,
            vec![
                EditorEffect::ListChanged(vec![ToDoItem::new("A", "x")]),
                EditorEffect::ContentUpdate(ContentUpdate::ItemRemoved {
                    widget_id: "widget42".to_string(),
                    item_id: "B".to_string(),
                }),
                EditorEffect::PersistWidget(WidgetFormValues {
                    to_do_list_items: Some(vec![ToDoItem::new("A", "x")]),
                    ..form(&["B"])
                }),
            ]
        );
    }

    #[test]
    fn test_delete_unselected_item_does_not_sync() {
        let mut editor = editor_xy(&[]);
        let effects = editor.delete(0);

        assert_eq!(editor.items(), &[ToDoItem::new("B", "y")]);
        assert_eq!(effects, vec![EditorEffect::ListChanged(vec![ToDoItem::new("B", "y")])]);
    }

    #[test]
    fn test_delete_out_of_bounds_is_silent() {
        let mut editor = editor_xy(&["A"]);
        assert!(editor.delete(2).is_empty());
        assert_eq!(editor.items().len(), 2);
    }

    #[test]
    fn test_delete_edited_item_resets_session() {
        let mut editor = editor_xy(&[]);
        editor.start_edit("B");
        editor.delete(1);
        assert!(editor.session().is_idle());
    }

    #[test]
    fn test_delete_other_item_keeps_session() {
        let mut editor = editor_xy(&[]);
        editor.start_edit("A");
        editor.delete(1);
        assert_eq!(editor.session(), &EditSession::Editing("A".to_string()));
    }

    #[test]
    fn test_clear_selected_removes_selected_and_syncs() {
        let mut editor = ToDoListEditor::new(
            vec![
                ToDoItem::new("A", "a"),
                ToDoItem::new("B", "b"),
                ToDoItem::new("C", "c"),
            ],
            form(&["A", "C"]),
        );
        assert!(editor.can_clear());

        let effects = editor.clear_selected();
        assert_eq!(editor.items(), &[ToDoItem::new("B", "b")]);
        assert!(effects.contains(&EditorEffect::ContentUpdate(ContentUpdate::ClearItems {
            widget_id: "widget42".to_string(),
        })));
        assert_eq!(syncs(&effects), 2);
    }

    #[test]
    fn test_clear_selected_syncs_even_when_nothing_removed() {
        let mut editor = editor_xy(&["stale-id"]);
        let effects = editor.clear_selected();
        assert_eq!(editor.items().len(), 2);
        assert_eq!(syncs(&effects), 2);
    }

    #[test]
    fn test_clear_selected_resets_session_on_removed_item() {
        let mut editor = editor_xy(&["A"]);
        editor.start_edit("A");
        editor.clear_selected();
        assert!(editor.session().is_idle());
    }

    #[test]
    fn test_reorder_preserves_items_and_never_syncs() {
        let mut editor = ToDoListEditor::new(
            vec![
                ToDoItem::new("A", "a"),
                ToDoItem::new("B", "b"),
                ToDoItem::new("C", "c"),
            ],
            form(&["A"]),
        );
        let before: HashSet<ToDoItemKey> = editor.items().iter().map(key).collect();

        let effects = editor.reorder(2, Some(0));
        assert_eq!(syncs(&effects), 0);
        let ids: Vec<&str> = editor.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);

        let after: HashSet<ToDoItemKey> = editor.items().iter().map(key).collect();
        assert_eq!(before, after);

        assert!(editor.reorder(0, None).is_empty());
    }

    type ToDoItemKey = (String, String);

    fn key(item: &ToDoItem) -> ToDoItemKey {
        (item.id.clone(), item.text.clone())
    }

    #[test]
    fn test_set_form_values_refreshes_selection_only() {
        let mut editor = editor_xy(&[]);
        assert!(!editor.can_clear());

        let mut next = form(&["A"]);
        next.to_do_list_items = Some(vec![]);
        editor.set_form_values(next);

        assert!(editor.is_selected("A"));
        assert!(editor.can_clear());
        assert_eq!(editor.items().len(), 2);
    }
}
