//! Defines the endpoint for listing every user.

use axum::{Json, extract::State};

use crate::{AppState, Error};

use super::UserSummary;

/// A route handler for listing all users in creation order.
///
/// Responds with 404 Not Found instead of an empty list when there are no users.
pub async fn list_users_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, Error> {
    let store = state.lock_store()?;
    let users = store.list()?.iter().map(UserSummary::from).collect();

    Ok(Json(users))
}
