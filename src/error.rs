//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user ID in the request path is not a hyphenated UUID string.
    ///
    /// Holds the offending path segment for logging.
    #[error("the ID sent is not a valid UUID")]
    InvalidUserId(String),

    /// No user with the requested ID exists in the store.
    #[error("user not found")]
    UserNotFound,

    /// The user exists but does not own a transaction with the requested ID.
    #[error("transaction not found")]
    TransactionNotFound,

    /// The user list was requested while the store holds no users.
    ///
    /// An empty store is reported as an error rather than an empty list.
    #[error("the user list is empty")]
    EmptyUserList,

    /// The request body was missing, not JSON, or did not contain every
    /// required field.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The store mutex was poisoned by a panicking request handler.
    #[error("could not acquire the store lock")]
    StoreLockError,

    /// No route matches the request path.
    #[error("route not found")]
    RouteNotFound,
}

impl Error {
    /// The HTTP status code that the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidUserId(_) => StatusCode::BAD_REQUEST,
            Error::UserNotFound
            | Error::TransactionNotFound
            | Error::EmptyUserList
            | Error::RouteNotFound => StatusCode::NOT_FOUND,
            Error::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::StoreLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The JSON body sent to the client for every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A human readable description of what went wrong.
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = match self {
            Error::InvalidUserId(ref id) => {
                tracing::debug!("rejected malformed user ID {id:?}");
                self.to_string()
            }
            // Internal details are only meant for the server logs.
            Error::StoreLockError => {
                tracing::error!("An unexpected error occurred: {}", self);
                "internal server error".to_owned()
            }
            error => error.to_string(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn invalid_user_id_maps_to_400() {
        let response = Error::InvalidUserId("123".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_resources_map_to_404() {
        for error in [
            Error::UserNotFound,
            Error::TransactionNotFound,
            Error::EmptyUserList,
            Error::RouteNotFound,
        ] {
            assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn invalid_body_maps_to_422() {
        let response = Error::InvalidBody("missing field `name`".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn lock_error_maps_to_500() {
        let response = Error::StoreLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_messages_are_distinct() {
        assert_ne!(
            Error::UserNotFound.to_string(),
            Error::TransactionNotFound.to_string()
        );
    }
}
