//! Row types, request bodies and response shapes for students and subjects.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Subject joined with its owning student's name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubjectRow {
    pub id: i64,
    pub name: String,
    pub student_id: i64,
    pub student_name: String,
}

/// Body of `POST /students` and `PUT /students/{id}`. Both fields are required.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StudentInput {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// Body of `POST /subjects` and `PUT /subjects/{id}`. Both fields are required.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubjectInput {
    #[schema(example = "Mathematics")]
    pub name: Option<String>,
    #[schema(example = 1)]
    pub student_id: Option<i64>,
}

/// Validated student fields.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// Validated subject fields.
#[derive(Debug, Clone)]
pub struct NewSubject {
    pub name: String,
    pub student_id: i64,
}

/// Returned by create and update on both entities.
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Created {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct StudentView {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Names of the subjects owned by this student, in id order.
    pub subjects: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SubjectView {
    pub id: i64,
    pub name: String,
    /// Name of the owning student.
    pub student: String,
}

impl StudentView {
    pub fn from_row(row: StudentRow, subjects: Vec<String>) -> Self {
        StudentView {
            id: row.id,
            name: row.name,
            email: row.email,
            subjects,
        }
    }
}

impl From<SubjectRow> for SubjectView {
    fn from(row: SubjectRow) -> Self {
        SubjectView {
            id: row.id,
            name: row.name,
            student: row.student_name,
        }
    }
}
