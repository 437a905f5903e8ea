//! Postgres-backed [`CmsRepository`].

use async_trait::async_trait;
use cms_core::types::DbId;

use super::{CmsRepository, CourseRepo, RepositoryError, StudentRepo};
use crate::models::course::Course;
use crate::models::student::Student;
use crate::DbPool;

/// [`CmsRepository`] over a Postgres connection pool.
#[derive(Clone)]
pub struct PgCmsRepository {
    pool: DbPool,
}

impl PgCmsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CmsRepository for PgCmsRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, RepositoryError> {
        Ok(CourseRepo::list(&self.pool).await?)
    }

    async fn add_course(&self, course: Course) -> Result<Course, RepositoryError> {
        let created = CourseRepo::create(&self.pool, &course).await?;
        tracing::debug!(course_id = created.id, "Course inserted");
        Ok(created)
    }

    async fn course_exists(&self, id: DbId) -> Result<bool, RepositoryError> {
        Ok(CourseRepo::exists(&self.pool, id).await?)
    }

    async fn get_course(&self, id: DbId) -> Result<Course, RepositoryError> {
        CourseRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(RepositoryError::MissingCourse(id))
    }

    async fn update_course(&self, id: DbId, course: Course) -> Result<Course, RepositoryError> {
        CourseRepo::update(&self.pool, id, &course)
            .await?
            .ok_or(RepositoryError::MissingCourse(id))
    }

    async fn delete_course(&self, id: DbId) -> Result<Option<Course>, RepositoryError> {
        let deleted = CourseRepo::delete(&self.pool, id).await?;
        if deleted.is_some() {
            tracing::debug!(course_id = id, "Course deleted");
        }
        Ok(deleted)
    }

    async fn get_students(&self, course_id: DbId) -> Result<Vec<Student>, RepositoryError> {
        Ok(StudentRepo::list_by_course(&self.pool, course_id).await?)
    }

    async fn add_student(&self, student: Student) -> Result<Student, RepositoryError> {
        let created = StudentRepo::create(&self.pool, &student).await?;
        tracing::debug!(
            student_id = created.id,
            course_id = created.course_id,
            "Student inserted"
        );
        Ok(created)
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
