use serde::{Deserialize, Serialize};

pub(crate) const LAST_BOARD_KEY: &str = "cogboard_last_board";

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, &json);
        }
    }
}

pub(crate) fn load_last_board() -> Option<String> {
    load_json_from_storage::<String>(LAST_BOARD_KEY).filter(|id| !id.trim().is_empty())
}

pub(crate) fn write_last_board(board_id: &str) {
    if board_id.trim().is_empty() {
        return;
    }
    save_json_to_storage(LAST_BOARD_KEY, &board_id.to_string());
}
