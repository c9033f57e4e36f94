use std::sync::Arc;

use todos_db::ToDoStore;

use crate::service::ToDoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage backend, shared with the to-do service and the past-due sweep.
    pub store: Arc<dyn ToDoStore>,
    /// To-do operations.
    pub todos: ToDoService,
}
