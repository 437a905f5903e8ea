pub mod course;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /courses                      list, create
/// /courses/{id}                 get, update, delete
/// /courses/{id}/students        list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/courses", course::router())
}
