//! The todo entity and its request payload.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted todo row. JSON uses lowercase field names; the table keeps
/// the `Id`/`Item`/`Complete` column casing of the original deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TodoItem {
    #[sqlx(rename = "Id")]
    pub id: i64,
    #[sqlx(rename = "Item")]
    pub item: Option<String>,
    #[sqlx(rename = "Complete")]
    pub complete: bool,
}

/// Mutable fields accepted on create and update. An `id` in the request
/// body is ignored; the store assigns and owns the key.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub complete: bool,
}
