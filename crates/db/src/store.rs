//! Storage contract for to-do items.
//!
//! The service layer and the past-due sweep only talk to a [`ToDoStore`];
//! [`PgToDoStore`] backs it with PostgreSQL through [`ToDoRepo`], and
//! [`InMemoryToDoStore`](crate::memory::InMemoryToDoStore) keeps everything
//! in process.

use async_trait::async_trait;
use todos_core::types::EntityId;

use crate::models::todo::ToDo;
use crate::repositories::ToDoRepo;
use crate::DbPool;

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Duplicate to-do id {0}")]
    Duplicate(EntityId),
}

/// Persistence operations the to-do core relies on.
///
/// Every call is atomic on its own; there are no cross-entity transactions.
/// `list_not_done` returns a fresh snapshot on each call, never a cursor
/// that outlives it.
#[async_trait]
pub trait ToDoStore: Send + Sync {
    /// Persist a new item and return it as stored.
    async fn insert(&self, todo: &ToDo) -> Result<ToDo, StoreError>;

    async fn get_by_id(&self, id: EntityId) -> Result<Option<ToDo>, StoreError>;

    /// Items whose status is not `DONE`, in insertion order.
    async fn list_not_done(&self) -> Result<Vec<ToDo>, StoreError>;

    /// Overwrite the mutable fields of an existing item with `todo`'s.
    /// Returns `None` if the item no longer exists.
    async fn save(&self, todo: &ToDo) -> Result<Option<ToDo>, StoreError>;

    /// Remove every item. Returns how many were removed.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`ToDoStore`] backed by the `todos` PostgreSQL table.
#[derive(Clone)]
pub struct PgToDoStore {
    pool: DbPool,
}

impl PgToDoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToDoStore for PgToDoStore {
    async fn insert(&self, todo: &ToDo) -> Result<ToDo, StoreError> {
        Ok(ToDoRepo::insert(&self.pool, todo).await?)
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<ToDo>, StoreError> {
        Ok(ToDoRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_not_done(&self) -> Result<Vec<ToDo>, StoreError> {
        Ok(ToDoRepo::list_not_done(&self.pool).await?)
    }

    async fn save(&self, todo: &ToDo) -> Result<Option<ToDo>, StoreError> {
        Ok(ToDoRepo::save(&self.pool, todo).await?)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        Ok(ToDoRepo::delete_all(&self.pool).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
