//! To-do entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todos_core::status::ToDoStatus;
use todos_core::types::{EntityId, Timestamp};

/// A row from the `todos` table.
///
/// Serialized with the public field names: `id` goes out as `uuid` and
/// `done_date` is omitted unless the item is done.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ToDo {
    #[serde(rename = "uuid")]
    pub id: EntityId,
    pub description: String,
    pub due_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub status: ToDoStatus,
    pub creation_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_date: Option<Timestamp>,
}

impl ToDo {
    /// Build a fresh item in the initial state.
    pub fn new(id: EntityId, description: String, due_date: Timestamp, now: Timestamp) -> Self {
        Self {
            id,
            description,
            due_date,
            status: ToDoStatus::INITIAL,
            creation_date: now,
            done_date: None,
        }
    }
}

/// DTO for creating a new to-do.
#[derive(Debug, Deserialize)]
pub struct CreateToDo {
    pub description: String,
    pub due_date: Timestamp,
}

/// DTO for updating a to-do's status.
///
/// Kept as a raw string so an unknown value surfaces as an invalid
/// transition rather than a body-decoding failure.
#[derive(Debug, Deserialize)]
pub struct UpdateToDoStatus {
    pub status: String,
}
