//! Route definitions for the `/courses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{course, student};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                 -> course::list
/// POST   /                 -> course::create
/// GET    /{id}             -> course::get_by_id
/// PUT    /{id}             -> course::update
/// DELETE /{id}             -> course::delete
///
/// GET    /{id}/students    -> student::list_by_course
/// POST   /{id}/students    -> student::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list).post(course::create))
        .route(
            "/{id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .route(
            "/{id}/students",
            get(student::list_by_course).post(student::create),
        )
}
