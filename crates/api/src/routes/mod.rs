pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the to-do API route tree.
///
/// Mounted at the root, next to `/health`:
///
/// ```text
/// /todos                 create (POST), delete all (DELETE)
/// /todos/planned         list not-done items (GET)
/// /todo/{id}             get (GET), update status (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(todos::router())
}
