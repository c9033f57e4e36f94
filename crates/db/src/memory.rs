//! In-process [`ToDoStore`].
//!
//! Items live in a `Vec` behind a tokio mutex, which keeps insertion order
//! for listings for free. Used by the test suites and by
//! `STORAGE_BACKEND=memory` for running without PostgreSQL.

use async_trait::async_trait;
use tokio::sync::Mutex;
use todos_core::types::EntityId;

use crate::models::todo::ToDo;
use crate::store::{StoreError, ToDoStore};

#[derive(Default)]
pub struct InMemoryToDoStore {
    items: Mutex<Vec<ToDo>>,
}

impl InMemoryToDoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items, whatever their status.
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}

#[async_trait]
impl ToDoStore for InMemoryToDoStore {
    async fn insert(&self, todo: &ToDo) -> Result<ToDo, StoreError> {
        let mut items = self.items.lock().await;
        if items.iter().any(|t| t.id == todo.id) {
            return Err(StoreError::Duplicate(todo.id));
        }
        items.push(todo.clone());
        Ok(todo.clone())
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<ToDo>, StoreError> {
        let items = self.items.lock().await;
        Ok(items.iter().find(|t| t.id == id).cloned())
    }

    async fn list_not_done(&self) -> Result<Vec<ToDo>, StoreError> {
        let items = self.items.lock().await;
        Ok(items
            .iter()
            .filter(|t| !t.status.is_done())
            .cloned()
            .collect())
    }

    async fn save(&self, todo: &ToDo) -> Result<Option<ToDo>, StoreError> {
        let mut items = self.items.lock().await;
        let Some(existing) = items.iter_mut().find(|t| t.id == todo.id) else {
            return Ok(None);
        };
        existing.status = todo.status;
        existing.done_date = todo.done_date;
        Ok(Some(existing.clone()))
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut items = self.items.lock().await;
        let removed = items.len() as u64;
        items.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
