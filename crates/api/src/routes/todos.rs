//! Route definitions for to-do items.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// To-do routes.
///
/// ```text
/// POST   /todos              -> create_todo
/// DELETE /todos              -> delete_all_todos
/// GET    /todos/planned      -> list_planned
/// GET    /todo/{id}          -> get_todo
/// PUT    /todo/{id}          -> update_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            post(todos::create_todo).delete(todos::delete_all_todos),
        )
        .route("/todos/planned", get(todos::list_planned))
        .route("/todo/{id}", get(todos::get_todo).put(todos::update_todo))
}
