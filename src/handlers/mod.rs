//! HTTP handlers for students and subjects.

pub mod student;
pub mod subject;
pub use student::*;
pub use subject::*;
