//! Handlers for students nested under `/courses/{id}/students`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cms_core::types::DbId;
use cms_db::models::student::Student;

use super::ensure_course_exists;
use crate::dto::StudentDto;
use crate::error::AppResult;
use crate::mapper::students_to_dtos;
use crate::state::AppState;

/// GET /courses/{id}/students
pub async fn list_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<StudentDto>>> {
    ensure_course_exists(state.repo.as_ref(), course_id).await?;
    let students = state.repo.get_students(course_id).await?;
    Ok(Json(students_to_dtos(students)))
}

/// POST /courses/{id}/students
///
/// The course is resolved from the path and attached to the new student
/// before it is stored.
pub async fn create(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(input): Json<StudentDto>,
) -> AppResult<(StatusCode, Json<StudentDto>)> {
    ensure_course_exists(state.repo.as_ref(), course_id).await?;
    let course = state.repo.get_course(course_id).await?;
    let student = state
        .repo
        .add_student(Student::from(input).enrol_in(&course))
        .await?;
    tracing::info!(student_id = student.id, course_id, "Student enrolled");
    Ok((StatusCode::CREATED, Json(StudentDto::from(student))))
}
