//! HTTP-level tests for the `/courses` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use cms_core::types::DbId;
use cms_db::models::course::Course;
use cms_db::models::student::Student;
use cms_db::repositories::{CmsRepository, InMemoryCmsRepository, RepositoryError};
use common::{body_json, body_text, create_course, delete, get, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Course CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_courses_starts_empty() {
    let app = common::build_test_app();
    let response = get(app, "/courses").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_course_returns_200_with_generated_id() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/courses",
        json!({"courseName": "Algorithms", "courseDuration": 30, "courseType": "Beginner"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["courseId"].as_i64().unwrap() > 0);
    assert_eq!(json["courseName"], "Algorithms");
    assert_eq!(json["courseDuration"], 30);
    assert_eq!(json["courseType"], "Beginner");
}

#[tokio::test]
async fn create_course_ignores_client_supplied_id() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/courses",
        json!({
            "courseId": 999,
            "courseName": "Compilers",
            "courseDuration": 40,
            "courseType": "Advanced",
        }),
    )
    .await;

    let json = body_json(response).await;
    let id = json["courseId"].as_i64().unwrap();
    assert_ne!(id, 999);

    let response = get(app, "/courses/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_course_by_id() {
    let app = common::build_test_app();
    let id = create_course(&app, "Get Me").await;

    let response = get(app, &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["courseId"], id);
    assert_eq!(json["courseName"], "Get Me");
}

#[tokio::test]
async fn get_nonexistent_course_returns_404_with_empty_body() {
    let app = common::build_test_app();
    let response = get(app, "/courses/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn list_courses_returns_all_created() {
    let app = common::build_test_app();
    create_course(&app, "C1").await;
    create_course(&app, "C2").await;

    let response = get(app, "/courses").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["courseName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["C1", "C2"]);
}

#[tokio::test]
async fn update_course_replaces_fields() {
    let app = common::build_test_app();
    let id = create_course(&app, "Original").await;

    let response = put_json(
        app.clone(),
        &format!("/courses/{id}"),
        json!({"courseName": "Updated", "courseDuration": 60, "courseType": "Intermediate"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["courseId"], id);
    assert_eq!(json["courseName"], "Updated");
    assert_eq!(json["courseDuration"], 60);
    assert_eq!(json["courseType"], "Intermediate");

    let json = body_json(get(app, &format!("/courses/{id}")).await).await;
    assert_eq!(json["courseName"], "Updated");
}

#[tokio::test]
async fn update_nonexistent_course_returns_404() {
    let app = common::build_test_app();
    let response = put_json(
        app,
        "/courses/42",
        json!({"courseName": "Ghost", "courseDuration": 1, "courseType": "Beginner"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_course_returns_last_representation() {
    let app = common::build_test_app();
    let id = create_course(&app, "Delete Me").await;

    let response = delete(app.clone(), &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["courseId"], id);
    assert_eq!(json["courseName"], "Delete Me");

    // Subsequent GET should 404.
    let response = get(app, &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_course_returns_404() {
    let app = common::build_test_app();
    let response = delete(app, "/courses/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_course_with_only_type_uses_zero_values() {
    let app = common::build_test_app();
    let response = post_json(app, "/courses", json!({"courseType": "Intermediate"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["courseName"], "");
    assert_eq!(json["courseDuration"], 0);
    assert_eq!(json["courseType"], "Intermediate");
}

#[tokio::test]
async fn malformed_course_type_is_rejected_by_extractor() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/courses",
        json!({"courseName": "Bad", "courseDuration": 1, "courseType": "Expert"}),
    )
    .await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Students (nested under courses)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_student_returns_201_and_is_listed_under_course() {
    let app = common::build_test_app();
    let course_id = create_course(&app, "Student Course").await;
    let other_id = create_course(&app, "Other Course").await;

    let response = post_json(
        app.clone(),
        &format!("/courses/{course_id}/students"),
        json!({"firstName": "Ada", "lastName": "Lovelace", "phoneNumber": "555-0100"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(created["studentId"].as_i64().unwrap() > 0);
    assert_eq!(created["firstName"], "Ada");
    assert_eq!(created["phoneNumber"], "555-0100");
    assert!(created.get("courseId").is_none());

    let listed = body_json(get(app.clone(), &format!("/courses/{course_id}/students")).await).await;
    assert_eq!(listed, json!([created]));

    let other = body_json(get(app, &format!("/courses/{other_id}/students")).await).await;
    assert_eq!(other, json!([]));
}

#[tokio::test]
async fn list_students_of_missing_course_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/courses/77/students").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_student_to_missing_course_returns_404() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/courses/77/students",
        json!({"firstName": "Grace", "lastName": "Hopper"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_course_drops_its_students() {
    let app = common::build_test_app();
    let course_id = create_course(&app, "Short Lived").await;
    post_json(
        app.clone(),
        &format!("/courses/{course_id}/students"),
        json!({"firstName": "Grace", "lastName": "Hopper"}),
    )
    .await;

    delete(app.clone(), &format!("/courses/{course_id}")).await;

    let response = get(app, &format!("/courses/{course_id}/students")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

/// Repository whose delete always loses the race against another request.
struct RacingDeleteRepo(InMemoryCmsRepository);

#[async_trait]
impl CmsRepository for RacingDeleteRepo {
    async fn list_courses(&self) -> Result<Vec<Course>, RepositoryError> {
        self.0.list_courses().await
    }
    async fn add_course(&self, course: Course) -> Result<Course, RepositoryError> {
        self.0.add_course(course).await
    }
    async fn course_exists(&self, id: DbId) -> Result<bool, RepositoryError> {
        self.0.course_exists(id).await
    }
    async fn get_course(&self, id: DbId) -> Result<Course, RepositoryError> {
        self.0.get_course(id).await
    }
    async fn update_course(&self, id: DbId, course: Course) -> Result<Course, RepositoryError> {
        self.0.update_course(id, course).await
    }
    async fn delete_course(&self, _id: DbId) -> Result<Option<Course>, RepositoryError> {
        Ok(None)
    }
    async fn get_students(&self, course_id: DbId) -> Result<Vec<Student>, RepositoryError> {
        self.0.get_students(course_id).await
    }
    async fn add_student(&self, student: Student) -> Result<Student, RepositoryError> {
        self.0.add_student(student).await
    }
    async fn health_check(&self) -> Result<(), RepositoryError> {
        self.0.health_check().await
    }
}

#[tokio::test]
async fn delete_that_loses_race_returns_400() {
    let app = common::build_test_app_with(Arc::new(RacingDeleteRepo(
        InMemoryCmsRepository::new(),
    )));
    let id = create_course(&app, "Contended").await;

    let response = delete(app, &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn unknown_stored_course_type_returns_500_with_message() {
    let repo = Arc::new(InMemoryCmsRepository::new());
    let stored = repo
        .add_course(Course {
            id: 0,
            name: "Legacy".into(),
            duration: 10,
            course_type: 9,
        })
        .await
        .unwrap();
    let app = common::build_test_app_with(repo);

    let response = get(app.clone(), &format!("/courses/{}", stored.id)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Unknown course type code: 9");

    let response = get(app, "/courses").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

/// Repository whose every call fails.
struct BrokenRepo;

#[async_trait]
impl CmsRepository for BrokenRepo {
    async fn list_courses(&self) -> Result<Vec<Course>, RepositoryError> {
        Err(RepositoryError::Poisoned)
    }
    async fn add_course(&self, _course: Course) -> Result<Course, RepositoryError> {
        Err(RepositoryError::Poisoned)
    }
    async fn course_exists(&self, _id: DbId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Poisoned)
    }
    async fn get_course(&self, id: DbId) -> Result<Course, RepositoryError> {
        Err(RepositoryError::MissingCourse(id))
    }
    async fn update_course(&self, id: DbId, _course: Course) -> Result<Course, RepositoryError> {
        Err(RepositoryError::MissingCourse(id))
    }
    async fn delete_course(&self, _id: DbId) -> Result<Option<Course>, RepositoryError> {
        Err(RepositoryError::Poisoned)
    }
    async fn get_students(&self, _course_id: DbId) -> Result<Vec<Student>, RepositoryError> {
        Err(RepositoryError::Poisoned)
    }
    async fn add_student(&self, _student: Student) -> Result<Student, RepositoryError> {
        Err(RepositoryError::Poisoned)
    }
    async fn health_check(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Poisoned)
    }
}

#[tokio::test]
async fn repository_failure_returns_500_with_error_text() {
    let app = common::build_test_app_with(Arc::new(BrokenRepo));

    let response = get(app.clone(), "/courses").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Repository state lock poisoned");

    let response = get(app, "/courses/1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
