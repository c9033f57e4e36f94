//! To-do service: the operations the HTTP layer exposes.
//!
//! Owns the create/read/update/list rules on top of a [`ToDoStore`] and a
//! [`Clock`]. Every single-entity call surfaces at most one error and never
//! retries; the caller decides what to do with it.

use std::sync::Arc;

use todos_core::clock::Clock;
use todos_core::error::CoreError;
use todos_core::status::ToDoStatus;
use todos_core::types::{EntityId, Timestamp};
use todos_db::models::todo::ToDo;
use todos_db::ToDoStore;

use crate::error::AppResult;

const ENTITY: &str = "ToDo";

#[derive(Clone)]
pub struct ToDoService {
    store: Arc<dyn ToDoStore>,
    clock: Arc<dyn Clock>,
}

impl ToDoService {
    pub fn new(store: Arc<dyn ToDoStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create a new item. Status is forced to `NOT_DONE` and `creation_date`
    /// to the current time; due dates in the past are accepted.
    pub async fn create(&self, description: String, due_date: Timestamp) -> AppResult<ToDo> {
        let todo = ToDo::new(EntityId::new_v4(), description, due_date, self.clock.now());
        let stored = self.store.insert(&todo).await?;

        tracing::info!(todo_id = %stored.id, due_date = %stored.due_date, "To-do created");

        Ok(stored)
    }

    pub async fn get_by_id(&self, id: EntityId) -> AppResult<ToDo> {
        let todo = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(todo)
    }

    /// Every item not yet done (including past-due ones), in insertion order.
    pub async fn list_not_done(&self) -> AppResult<Vec<ToDo>> {
        Ok(self.store.list_not_done().await?)
    }

    /// Move an item to a client-requested status, given by its wire name.
    ///
    /// The item is looked up before the status is parsed, so an unknown id
    /// is reported as not found whatever was requested. The transition is
    /// applied in memory and the full entity written back in one `save`.
    /// Nothing is written when the item is missing or the transition is
    /// rejected.
    pub async fn update(&self, id: EntityId, requested: &str) -> AppResult<ToDo> {
        let mut todo = self.get_by_id(id).await?;
        let from = todo.status;
        let requested: ToDoStatus = requested.parse()?;

        let change = from.apply_update(requested, self.clock.now())?;
        todo.status = change.status;
        todo.done_date = change.done_date;

        let saved = self
            .store
            .save(&todo)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::info!(todo_id = %id, from = %from, to = %saved.status, "To-do status updated");

        Ok(saved)
    }

    /// Remove every item. Administrative; bypasses the status lifecycle.
    pub async fn delete_all(&self) -> AppResult<u64> {
        let deleted = self.store.delete_all().await?;
        tracing::warn!(deleted, "All to-dos deleted");
        Ok(deleted)
    }
}
