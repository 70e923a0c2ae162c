use crate::models::ToDoItem;
use std::collections::HashSet;

/// Fresh, collision-resistant item id (`item-<uuid v4>`).
pub(crate) fn new_item_id() -> String {
    format!("item-{}", uuid::Builder::from_random_bytes(random_bytes()).into_uuid())
}

fn random_bytes() -> [u8; 16] {
    let mut bytes = [0u8; 16];
    if getrandom::getrandom(&mut bytes).is_ok() {
        return bytes;
    }
    fallback_bytes()
}

/// Ids without an entropy source (should not happen in a browser): a counter,
/// mixed with the clock where one is available.
fn fallback_bytes() -> [u8; 16] {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(1);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    let mut hasher = DefaultHasher::new();
    counter.hash(&mut hasher);
    #[cfg(target_arch = "wasm32")]
    crate::util::now_ms().hash(&mut hasher);
    let hi = hasher.finish();
    hi.hash(&mut hasher);
    let lo = hasher.finish();

    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&hi.to_le_bytes());
    bytes[8..].copy_from_slice(&lo.to_le_bytes());
    bytes
}

/// Empty or whitespace-only labels are never stored.
pub(crate) fn is_valid_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Ordered to-do items, the editor's source of truth.
///
/// Every mutation builds a new list and swaps it in, so a list handed out to
/// the form is never modified afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ItemStore {
    items: Vec<ToDoItem>,
}

impl ItemStore {
    /// Seed from the widget's saved items. Later duplicates of an id are dropped.
    pub fn new(seed: Vec<ToDoItem>) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(seed.len());
        for item in seed {
            if seen.insert(item.id.clone()) {
                items.push(item);
            } else {
                leptos::logging::warn!("[ToDoList] dropping duplicate item id {}", item.id);
            }
        }
        Self { items }
    }

    pub fn items(&self) -> &[ToDoItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ToDoItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn add(&mut self, text: &str) -> Option<Vec<ToDoItem>> {
        if !is_valid_text(text) {
            return None;
        }

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.extend(self.items.iter().cloned());
        next.push(ToDoItem::new(new_item_id(), text));

        Some(self.replace(next))
    }

    pub fn update(&mut self, id: &str, text: &str) -> Option<Vec<ToDoItem>> {
        if !is_valid_text(text) || !self.contains(id) {
            return None;
        }

        let next = self
            .items
            .iter()
            .map(|i| {
                if i.id == id {
                    ToDoItem::new(i.id.clone(), text)
                } else {
                    i.clone()
                }
            })
            .collect();

        Some(self.replace(next))
    }

    /// Remove the item at `index`, returning it with the resulting list.
    pub fn delete(&mut self, index: usize) -> Option<(ToDoItem, Vec<ToDoItem>)> {
        let removed = self.items.get(index)?.clone();

        let next = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect();

        Some((removed, self.replace(next)))
    }

    /// Drop every item whose id is in `selected`.
    pub fn clear(&mut self, selected: &HashSet<String>) -> Vec<ToDoItem> {
        let next = self
            .items
            .iter()
            .filter(|i| !selected.contains(&i.id))
            .cloned()
            .collect();

        self.replace(next)
    }

    /// Move the item at `from` to position `to`.
    ///
    /// A drag without destination, an out-of-range index or a drop in place changes nothing.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> Option<Vec<ToDoItem>> {
        let to = to?;
        let len = self.items.len();
        if from >= len || to >= len || from == to {
            return None;
        }

        let mut next = self.items.clone();
        let moved = next.remove(from);
        next.insert(to, moved);

        Some(self.replace(next))
    }

    fn replace(&mut self, next: Vec<ToDoItem>) -> Vec<ToDoItem> {
        self.items = next;
        self.items.clone()
    }
}
