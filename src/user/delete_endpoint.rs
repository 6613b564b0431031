//! Defines the endpoint for deleting a user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, Error, user::UserId};

/// A route handler for deleting a user and all of their transactions.
///
/// Responds with 204 No Content on success.
pub async fn delete_user_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<StatusCode, Error> {
    let mut store = state.lock_store()?;
    store.delete(user_id)?;

    tracing::debug!("Deleted user {user_id}");

    Ok(StatusCode::NO_CONTENT)
}
