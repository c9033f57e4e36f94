//! Handlers for to-do items.
//!
//! Thin adapters between HTTP and [`ToDoService`](crate::service::ToDoService):
//! decode the request, validate the description, delegate, and encode
//! the result. Bodies are the bare to-do object (or array), not enveloped.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use todos_core::todo;
use todos_core::types::EntityId;
use todos_db::models::todo::{CreateToDo, UpdateToDoStatus};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /todos
// ---------------------------------------------------------------------------

/// Create a new to-do. It always starts as `NOT_DONE`.
pub async fn create_todo(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateToDo>,
) -> AppResult<impl IntoResponse> {
    todo::validate_description(&input.description)?;

    let created = state.todos.create(input.description, input.due_date).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /todo/{id}
// ---------------------------------------------------------------------------

/// Get a single to-do by ID.
pub async fn get_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.get_by_id(id).await?;
    Ok(Json(todo))
}

// ---------------------------------------------------------------------------
// PUT /todo/{id}
// ---------------------------------------------------------------------------

/// Mark a to-do as `DONE` or back to `NOT_DONE`.
pub async fn update_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<UpdateToDoStatus>,
) -> AppResult<impl IntoResponse> {
    let updated = state.todos.update(id, &input.status).await?;

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// GET /todos/planned
// ---------------------------------------------------------------------------

/// List every to-do not yet done, oldest first.
pub async fn list_planned(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = state.todos.list_not_done().await?;
    Ok(Json(todos))
}

// ---------------------------------------------------------------------------
// DELETE /todos
// ---------------------------------------------------------------------------

/// Remove every to-do.
pub async fn delete_all_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.todos.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
