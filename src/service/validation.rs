//! Presence checks on request bodies.

use crate::error::AppError;
use crate::model::{NewStudent, NewSubject, StudentInput, SubjectInput};

pub struct RequestValidator;

impl RequestValidator {
    /// Both `name` and `email` must be present and non-null.
    pub fn student(input: StudentInput) -> Result<NewStudent, AppError> {
        Ok(NewStudent {
            name: required("name", input.name)?,
            email: required("email", input.email)?,
        })
    }

    /// Both `name` and `student_id` must be present and non-null.
    pub fn subject(input: SubjectInput) -> Result<NewSubject, AppError> {
        Ok(NewSubject {
            name: required("name", input.name)?,
            student_id: required("student_id", input.student_id)?,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_requires_both_fields() {
        let ok = RequestValidator::student(StudentInput {
            name: Some("A".into()),
            email: Some("a@x.com".into()),
        })
        .unwrap();
        assert_eq!(ok.name, "A");
        assert_eq!(ok.email, "a@x.com");

        let err = RequestValidator::student(StudentInput {
            name: Some("A".into()),
            email: None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "validation: email is required");
    }

    #[test]
    fn subject_reports_first_missing_field() {
        let err = RequestValidator::subject(SubjectInput::default()).unwrap_err();
        assert_eq!(err.to_string(), "validation: name is required");

        let err = RequestValidator::subject(SubjectInput {
            name: Some("Math".into()),
            student_id: None,
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m == "student_id is required"));
    }
}
