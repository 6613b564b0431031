//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, Error, user::UserId};

use super::resolve_transaction_id;

/// A route handler for deleting one of a user's transactions.
///
/// Responds with 204 No Content on success.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(UserId, String)>,
) -> Result<StatusCode, Error> {
    let mut store = state.lock_store()?;
    let transaction_id = resolve_transaction_id(&store, user_id, &transaction_id)?;
    store.delete_transaction(user_id, transaction_id)?;

    tracing::debug!("Deleted transaction {transaction_id} for user {user_id}");

    Ok(StatusCode::NO_CONTENT)
}
