//! Defines the endpoint for getting a single user's profile.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, Error, user::UserId};

use super::UserDetails;

/// A route handler for getting a user's profile by ID.
///
/// The response omits the user's transactions.
pub async fn get_user_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserDetails>, Error> {
    let store = state.lock_store()?;
    let user = store.find_by_id(user_id)?;

    Ok(Json(UserDetails::from(user)))
}
