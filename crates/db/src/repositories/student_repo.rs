//! Repository for the `students` table.

use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::Student;

const COLUMNS: &str = "id, course_id, first_name, last_name, phone_number, address";

/// Provides create and list operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a student under `input.course_id`, returning the created row.
    pub async fn create(pool: &PgPool, input: &Student) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (course_id, first_name, last_name, phone_number, address)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(input.course_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone_number)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// List students of a course ordered by id.
    pub async fn list_by_course(pool: &PgPool, course_id: DbId) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE course_id = $1 ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }
}
