//! Shared application state for all routes.

use crate::store::TodoStore;

#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
}
