use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Path` whose rejection is an `AppError`, so malformed ids get the JSON envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `Json` whose rejection is an `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
