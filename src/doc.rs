//! OpenAPI document assembled from the handler annotations.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{student, subject};
use crate::model::{Created, StudentInput, StudentView, SubjectInput, SubjectView};
use utoipa::OpenApi;

/// Student Registry API
///
/// Create, list, update and delete students and the subjects they own.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Registry",
        description = "Create, list, update and delete students and the subjects they own."
    ),
    paths(
        student::create_student,
        student::list_students,
        student::read_student,
        student::update_student,
        student::delete_student,
        subject::create_subject,
        subject::list_subjects,
        subject::read_subject,
        subject::update_subject,
        subject::delete_subject,
    ),
    components(
        schemas(
            StudentInput,
            SubjectInput,
            Created,
            StudentView,
            SubjectView,
            ErrorBody,
            ErrorDetail,
        )
    ),
    tags(
        (name = "students", description = "Students and the names of their subjects"),
        (name = "subjects", description = "Subjects, each owned by one student"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_entity_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/students", "/students/{id}", "/subjects", "/subjects/{id}"]);

        let students = &doc.paths.paths["/students/{id}"];
        assert!(students.get.is_some());
        assert!(students.put.is_some());
        assert!(students.delete.is_some());
    }

    #[test]
    fn serializes_to_json() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("\"title\":\"Student Registry\""));
        assert!(json.contains("StudentView"));
    }
}
