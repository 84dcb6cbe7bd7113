//! Subject handlers: create, list, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiPath};
use crate::model::{Created, SubjectInput, SubjectView};
use crate::service::{RequestValidator, SubjectService};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// Create a subject owned by an existing student.
#[utoipa::path(
    post,
    path = "/subjects",
    tag = "subjects",
    request_body = SubjectInput,
    responses(
        (status = 201, description = "Subject created", body = Created),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (
            status = 422,
            description = "A required field is missing or mistyped, or student_id is unknown",
            body = ErrorBody
        ),
    )
)]
pub async fn create_subject(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SubjectInput>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let subject = RequestValidator::subject(body)?;
    let created = SubjectService::create(&state.pool, &subject).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all subjects with their owning student's name.
#[utoipa::path(
    get,
    path = "/subjects",
    tag = "subjects",
    responses(
        (status = 200, description = "All subjects", body = [SubjectView]),
    )
)]
pub async fn list_subjects(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubjectView>>, AppError> {
    Ok(Json(SubjectService::list(&state.pool).await?))
}

/// Fetch one subject.
#[utoipa::path(
    get,
    path = "/subjects/{id}",
    tag = "subjects",
    params(("id" = i64, Path, description = "Subject id")),
    responses(
        (status = 200, description = "The subject", body = SubjectView),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No subject with this id", body = ErrorBody),
    )
)]
pub async fn read_subject(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SubjectView>, AppError> {
    let subject = SubjectService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("subject {}", id)))?;
    Ok(Json(subject))
}

/// Replace a subject's name and owner.
#[utoipa::path(
    put,
    path = "/subjects/{id}",
    tag = "subjects",
    params(("id" = i64, Path, description = "Subject id")),
    request_body = SubjectInput,
    responses(
        (status = 200, description = "Subject updated", body = Created),
        (status = 400, description = "Malformed body or id", body = ErrorBody),
        (status = 404, description = "No subject with this id", body = ErrorBody),
        (
            status = 422,
            description = "A required field is missing or mistyped, or student_id is unknown",
            body = ErrorBody
        ),
    )
)]
pub async fn update_subject(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<SubjectInput>,
) -> Result<Json<Created>, AppError> {
    let subject = RequestValidator::subject(body)?;
    let updated = SubjectService::update(&state.pool, id, &subject)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("subject {}", id)))?;
    Ok(Json(updated))
}

/// Delete a subject.
#[utoipa::path(
    delete,
    path = "/subjects/{id}",
    tag = "subjects",
    params(("id" = i64, Path, description = "Subject id")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No subject with this id", body = ErrorBody),
    )
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    if !SubjectService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("subject {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
