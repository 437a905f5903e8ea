//! In-memory [`CmsRepository`] for tests and database-less runs.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use cms_core::types::DbId;

use super::{CmsRepository, RepositoryError};
use crate::models::course::Course;
use crate::models::student::Student;

#[derive(Debug, Default)]
struct Tables {
    courses: BTreeMap<DbId, Course>,
    students: BTreeMap<DbId, Student>,
    last_course_id: DbId,
    last_student_id: DbId,
}

/// In-memory [`CmsRepository`].
///
/// Ids start at 1 and are never reused, matching `SERIAL` columns. Intended
/// for tests and for running the API without a database.
#[derive(Debug, Default)]
pub struct InMemoryCmsRepository {
    tables: RwLock<Tables>,
}

impl InMemoryCmsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables.read().map_err(|_| RepositoryError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables.write().map_err(|_| RepositoryError::Poisoned)
    }
}

#[async_trait]
impl CmsRepository for InMemoryCmsRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, RepositoryError> {
        Ok(self.read()?.courses.values().cloned().collect())
    }

    async fn add_course(&self, course: Course) -> Result<Course, RepositoryError> {
        let mut tables = self.write()?;
        tables.last_course_id += 1;
        let created = Course {
            id: tables.last_course_id,
            ..course
        };
        tables.courses.insert(created.id, created.clone());
        Ok(created)
    }

    async fn course_exists(&self, id: DbId) -> Result<bool, RepositoryError> {
        Ok(self.read()?.courses.contains_key(&id))
    }

    async fn get_course(&self, id: DbId) -> Result<Course, RepositoryError> {
        self.read()?
            .courses
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::MissingCourse(id))
    }

    async fn update_course(&self, id: DbId, course: Course) -> Result<Course, RepositoryError> {
        let mut tables = self.write()?;
        let stored = tables
            .courses
            .get_mut(&id)
            .ok_or(RepositoryError::MissingCourse(id))?;
        *stored = Course { id, ..course };
        Ok(stored.clone())
    }

    async fn delete_course(&self, id: DbId) -> Result<Option<Course>, RepositoryError> {
        let mut tables = self.write()?;
        let removed = tables.courses.remove(&id);
        if removed.is_some() {
            tables.students.retain(|_, s| s.course_id != id);
        }
        Ok(removed)
    }

    async fn get_students(&self, course_id: DbId) -> Result<Vec<Student>, RepositoryError> {
        Ok(self
            .read()?
            .students
            .values()
            .filter(|s| s.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn add_student(&self, student: Student) -> Result<Student, RepositoryError> {
        let mut tables = self.write()?;
        // Foreign key on students.course_id.
        if !tables.courses.contains_key(&student.course_id) {
            return Err(RepositoryError::MissingCourse(student.course_id));
        }
        tables.last_student_id += 1;
        let created = Student {
            id: tables.last_student_id,
            ..student
        };
        tables.students.insert(created.id, created.clone());
        Ok(created)
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        self.read().map(|_| ())
    }
}
