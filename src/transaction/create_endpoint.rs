//! Defines the endpoint for creating a transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    json::AppJson,
    user::{User, UserId},
};

use super::TransactionData;

/// A route handler for adding a transaction to a user, responds with the updated user.
///
/// A missing user is reported before an invalid body.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    body: Result<AppJson<TransactionData>, Error>,
) -> Result<Json<User>, Error> {
    let mut store = state.lock_store()?;
    store.find_by_id(user_id)?;
    let AppJson(data) = body?;
    let user = store.append_transaction(user_id, data)?;

    tracing::debug!(
        "Created transaction {:?} for user {user_id}",
        user.transactions.last().map(|transaction| transaction.id)
    );

    Ok(Json(user))
}
