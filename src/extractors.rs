//! Request extractors whose rejections render as `AppError` bodies.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body. Syntax errors are 400, wrong field types are 422, oversized bodies are 413.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters. A segment that does not parse (e.g. a non-integer id) is 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
