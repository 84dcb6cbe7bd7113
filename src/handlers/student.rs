//! Student handlers: create, list, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiPath};
use crate::model::{Created, StudentInput, StudentView};
use crate::service::{RequestValidator, StudentService};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// Create a student.
#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = StudentInput,
    responses(
        (status = 201, description = "Student created", body = Created),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (status = 422, description = "A required field is missing or mistyped", body = ErrorBody),
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<StudentInput>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let student = RequestValidator::student(body)?;
    let created = StudentService::create(&state.pool, &student).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all students with the names of their subjects.
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "All students", body = [StudentView]),
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentView>>, AppError> {
    Ok(Json(StudentService::list(&state.pool).await?))
}

/// Fetch one student.
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = StudentView),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No student with this id", body = ErrorBody),
    )
)]
pub async fn read_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<StudentView>, AppError> {
    let student = StudentService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(student))
}

/// Replace a student's name and email.
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student updated", body = Created),
        (status = 400, description = "Malformed body or id", body = ErrorBody),
        (status = 404, description = "No student with this id", body = ErrorBody),
        (status = 422, description = "A required field is missing or mistyped", body = ErrorBody),
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<StudentInput>,
) -> Result<Json<Created>, AppError> {
    let student = RequestValidator::student(body)?;
    let updated = StudentService::update(&state.pool, id, &student)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(updated))
}

/// Delete a student that owns no subjects.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No student with this id", body = ErrorBody),
        (status = 409, description = "Student still has subjects", body = ErrorBody),
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    if !StudentService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("student {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    async fn state() -> AppState {
        AppState::new(memory_pool().await.unwrap())
    }

    fn input(name: &str, email: &str) -> StudentInput {
        StudentInput {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    #[tokio::test]
    async fn create_returns_created_status() {
        let state = state().await;
        let (status, Json(created)) =
            create_student(State(state), ApiJson(input("A", "a@x.com"))).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.name, "A");
    }

    #[tokio::test]
    async fn create_without_email_fails_validation() {
        let state = state().await;
        let body = StudentInput {
            name: Some("A".into()),
            email: None,
        };
        let err = create_student(State(state), ApiJson(body)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id_are_not_found() {
        let state = state().await;
        let err = update_student(State(state.clone()), ApiPath(7), ApiJson(input("B", "b@x.com")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = delete_student(State(state.clone()), ApiPath(7)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = read_student(State(state), ApiPath(7)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
