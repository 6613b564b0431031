//! Defines the endpoint for getting a single transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, Error, user::UserId};

use super::{Transaction, resolve_transaction_id};

/// A route handler for getting one of a user's transactions.
///
/// Responds with 404 Not Found if the user does not exist, or if the
/// transaction does not belong to the user.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(UserId, String)>,
) -> Result<Json<Transaction>, Error> {
    let store = state.lock_store()?;
    let transaction_id = resolve_transaction_id(&store, user_id, &transaction_id)?;
    let transaction = store.find_transaction(user_id, transaction_id)?;

    Ok(Json(transaction.clone()))
}
