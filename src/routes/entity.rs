//! Entity CRUD routes for students and subjects.

use crate::handlers::{
    create_student, create_subject, delete_student, delete_subject, list_students, list_subjects,
    read_student, read_subject, update_student, update_subject,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(read_student).put(update_student).delete(delete_student),
        )
        .route("/subjects", get(list_subjects).post(create_subject))
        .route(
            "/subjects/:id",
            get(read_subject).put(update_subject).delete(delete_subject),
        )
        .with_state(state)
}
