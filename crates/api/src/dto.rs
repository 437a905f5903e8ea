//! Transfer objects exchanged with HTTP clients.
//!
//! Field names are camelCase on the wire (`courseId`, `courseName`, ...).

use cms_core::error::CoreError;
use cms_core::types::{CourseTypeId, DbId};
use serde::{Deserialize, Serialize};

/// Course category as exposed to clients, serialized by variant name.
///
/// Discriminants are the category codes stored in `courses.course_type`.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl CourseType {
    /// Return the stored category code.
    pub fn code(self) -> CourseTypeId {
        self as CourseTypeId
    }
}

impl From<CourseType> for CourseTypeId {
    fn from(value: CourseType) -> Self {
        value.code()
    }
}

impl TryFrom<CourseTypeId> for CourseType {
    type Error = CoreError;

    fn try_from(code: CourseTypeId) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Beginner),
            2 => Ok(Self::Intermediate),
            3 => Ok(Self::Advanced),
            other => Err(CoreError::UnknownCourseType(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    /// Ignored on create; the repository assigns the id.
    #[serde(default)]
    pub course_id: DbId,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub course_duration: i32,
    /// Required: no variant stands for the zero code.
    pub course_type: CourseType,
}

/// A student as seen by clients. The owning course comes from the URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(default)]
    pub student_id: DbId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}
