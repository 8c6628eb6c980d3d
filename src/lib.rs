//! Minimal todo CRUD service over SQLite.

pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use model::{TodoItem, TodoPayload};
pub use routes::{app, common_routes, todo_routes};
pub use state::AppState;
pub use store::TodoStore;
