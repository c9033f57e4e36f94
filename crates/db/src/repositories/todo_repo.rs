//! Repository for the `todos` table.

use sqlx::PgPool;
use todos_core::status::STATUS_DONE;
use todos_core::types::EntityId;

use crate::models::todo::ToDo;

/// Column list for `todos` queries.
const COLUMNS: &str = "id, description, due_date, status, creation_date, done_date";

/// Provides CRUD operations for to-do items.
pub struct ToDoRepo;

impl ToDoRepo {
    /// Insert a fully-formed item, returning the stored row.
    pub async fn insert(pool: &PgPool, todo: &ToDo) -> Result<ToDo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos \
                (id, description, due_date, status, creation_date, done_date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ToDo>(&query)
            .bind(todo.id)
            .bind(&todo.description)
            .bind(todo.due_date)
            .bind(todo.status.as_str())
            .bind(todo.creation_date)
            .bind(todo.done_date)
            .fetch_one(pool)
            .await
    }

    /// Find a to-do by ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<ToDo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, ToDo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every item whose status is not `DONE`, in insertion order.
    pub async fn list_not_done(pool: &PgPool) -> Result<Vec<ToDo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE status <> $1 ORDER BY seq ASC");
        sqlx::query_as::<_, ToDo>(&query)
            .bind(STATUS_DONE)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the mutable fields (`status`, `done_date`) of an existing
    /// item. Returns the updated row if found.
    pub async fn save(pool: &PgPool, todo: &ToDo) -> Result<Option<ToDo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET status = $2, done_date = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ToDo>(&query)
            .bind(todo.id)
            .bind(todo.status.as_str())
            .bind(todo.done_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete every item. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
