use crate::types::{CourseTypeId, DbId};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Unknown course type code: {0}")]
    UnknownCourseType(CourseTypeId),
}
