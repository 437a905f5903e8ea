//! Row models for the `courses` and `students` tables.
//!
//! These are the persistence-side shapes. The HTTP layer never serializes
//! them directly; it maps them to its own transfer objects.

pub mod course;
pub mod student;
