//! Student Registry: REST backend for students and the subjects they own.

pub mod config;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use doc::ApiDoc;
pub use error::{AppError, ConfigError};
pub use routes::app;
pub use service::{StudentService, SubjectService};
pub use state::AppState;
pub use store::{connect, ensure_tables};
