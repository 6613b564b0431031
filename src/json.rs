//! A JSON extractor that reports body rejections as [Error] responses.

use axum::extract::FromRequest;

use crate::Error;

/// Deserializes a JSON request body like [axum::Json], but rejects with
/// [Error::InvalidBody] so the client always receives a JSON error body.
///
/// Every field of `T` is required; a body that omits one is rejected before
/// any entity is built.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);
