//! To-do list editing: item store, edit session and backend sync.

mod editor;
mod session;
mod store;
mod sync;

pub(crate) use editor::{Effects, ToDoListEditor};
pub(crate) use sync::{run_effects, ApiSyncGateway};
