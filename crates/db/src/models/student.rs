//! Student entity model.

use cms_core::types::DbId;
use sqlx::FromRow;

use crate::models::course::Course;

/// A student row from the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: DbId,
    /// Owning course. Must reference an existing course before insert.
    pub course_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl Student {
    /// Attach this student to `course`, replacing any previous reference.
    pub fn enrol_in(mut self, course: &Course) -> Self {
        self.course_id = course.id;
        self
    }
}
