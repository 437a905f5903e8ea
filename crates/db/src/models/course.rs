//! Course entity model.

use cms_core::types::{CourseTypeId, DbId};
use sqlx::FromRow;

/// A course row from the `courses` table.
///
/// `id` is assigned by the repository on insert; whatever value a caller
/// places here before `add_course` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub duration: i32,
    pub course_type: CourseTypeId,
}
