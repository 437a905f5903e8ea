//! Handlers for the `/courses` resource.

use axum::extract::{Path, State};
use axum::Json;
use cms_core::types::DbId;
use cms_db::models::course::Course;

use super::ensure_course_exists;
use crate::dto::CourseDto;
use crate::error::{AppError, AppResult};
use crate::mapper::courses_to_dtos;
use crate::state::AppState;

/// GET /courses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CourseDto>>> {
    let courses = state.repo.list_courses().await?;
    Ok(Json(courses_to_dtos(courses)?))
}

/// POST /courses
///
/// Responds 200, not 201; any `courseId` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CourseDto>,
) -> AppResult<Json<CourseDto>> {
    let course = state.repo.add_course(Course::from(input)).await?;
    tracing::info!(course_id = course.id, "Course created");
    Ok(Json(CourseDto::try_from(course)?))
}

/// GET /courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CourseDto>> {
    ensure_course_exists(state.repo.as_ref(), id).await?;
    let course = state.repo.get_course(id).await?;
    Ok(Json(CourseDto::try_from(course)?))
}

/// PUT /courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CourseDto>,
) -> AppResult<Json<CourseDto>> {
    ensure_course_exists(state.repo.as_ref(), id).await?;
    let course = state.repo.update_course(id, Course::from(input)).await?;
    Ok(Json(CourseDto::try_from(course)?))
}

/// DELETE /courses/{id}
///
/// Responds 400 when the course vanished between the existence check and
/// the delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CourseDto>> {
    ensure_course_exists(state.repo.as_ref(), id).await?;
    let course = state.repo.delete_course(id).await?.ok_or_else(|| {
        AppError::BadRequest(format!("Course {id} was removed before it could be deleted"))
    })?;
    tracing::info!(course_id = id, "Course deleted");
    Ok(Json(CourseDto::try_from(course)?))
}
