//! Repository layer.
//!
//! [`CourseRepo`] and [`StudentRepo`] are zero-sized structs providing async
//! CRUD methods that accept `&PgPool` as the first argument. The HTTP layer
//! does not call them directly; it goes through the [`CmsRepository`] trait,
//! implemented for Postgres by [`PgCmsRepository`] and for tests and
//! database-less runs by [`InMemoryCmsRepository`].

pub mod course_repo;
pub mod in_memory;
pub mod pg;
pub mod student_repo;

pub use course_repo::CourseRepo;
pub use in_memory::InMemoryCmsRepository;
pub use pg::PgCmsRepository;
pub use student_repo::StudentRepo;

use async_trait::async_trait;
use cms_core::types::DbId;

use crate::models::course::Course;
use crate::models::student::Student;

/// Failure reported by a [`CmsRepository`] call.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Course {0} does not exist")]
    MissingCourse(DbId),

    #[error("Repository state lock poisoned")]
    Poisoned,
}

/// Persistence contract for courses and their students.
///
/// Every method is atomic on its own. Callers that chain calls (for example
/// `course_exists` followed by `delete_course`) must expect interleaving
/// with other requests.
#[async_trait]
pub trait CmsRepository: Send + Sync {
    /// All courses, ordered by id.
    async fn list_courses(&self) -> Result<Vec<Course>, RepositoryError>;

    /// Insert a course. The id on `course` is ignored; the stored row is returned.
    async fn add_course(&self, course: Course) -> Result<Course, RepositoryError>;

    async fn course_exists(&self, id: DbId) -> Result<bool, RepositoryError>;

    /// Fetch a course. A missing row is [`RepositoryError::MissingCourse`].
    async fn get_course(&self, id: DbId) -> Result<Course, RepositoryError>;

    /// Replace every mapped field of course `id` with the values in `course`.
    async fn update_course(&self, id: DbId, course: Course) -> Result<Course, RepositoryError>;

    /// Remove course `id` and its students, returning the removed course.
    ///
    /// Returns `None` when no row was removed.
    async fn delete_course(&self, id: DbId) -> Result<Option<Course>, RepositoryError>;

    /// Students enrolled in course `course_id`, ordered by id.
    async fn get_students(&self, course_id: DbId) -> Result<Vec<Student>, RepositoryError>;

    /// Insert a student. `student.course_id` must already reference a course.
    async fn add_student(&self, student: Student) -> Result<Student, RepositoryError>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> Result<(), RepositoryError>;
}
