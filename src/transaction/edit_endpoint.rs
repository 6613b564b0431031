//! Defines the endpoint for replacing a transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, Error, json::AppJson, user::UserId};

use super::{Transaction, TransactionData, resolve_transaction_id};

/// A route handler for replacing a user's transaction, responds with the edited transaction.
///
/// The title, value and type are overwritten; the ID is kept. A missing user
/// or transaction is reported before an invalid body.
pub async fn edit_transaction_endpoint(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(UserId, String)>,
    body: Result<AppJson<TransactionData>, Error>,
) -> Result<Json<Transaction>, Error> {
    let mut store = state.lock_store()?;
    let transaction_id = resolve_transaction_id(&store, user_id, &transaction_id)?;
    store.find_transaction(user_id, transaction_id)?;
    let AppJson(data) = body?;
    let transaction = store.replace_transaction(user_id, transaction_id, data)?;

    tracing::debug!("Updated transaction {transaction_id} for user {user_id}");

    Ok(Json(transaction))
}
