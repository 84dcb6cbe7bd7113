//! Entity services over the SQLite pool.

mod student;
mod subject;
mod validation;
pub use student::StudentService;
pub use subject::SubjectService;
pub use validation::RequestValidator;
