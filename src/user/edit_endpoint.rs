//! Defines the endpoint for replacing a user's profile.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, Error, json::AppJson, user::UserId};

use super::{User, UserData};

/// A route handler for replacing a user's profile, responds with the edited user.
///
/// Every profile field is overwritten; the ID and transactions are kept.
/// A missing user is reported before an invalid body.
pub async fn edit_user_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    body: Result<AppJson<UserData>, Error>,
) -> Result<Json<User>, Error> {
    let mut store = state.lock_store()?;
    store.find_by_id(user_id)?;
    let AppJson(data) = body?;
    let user = store.replace(user_id, data)?;

    tracing::debug!("Updated user {user_id}");

    Ok(Json(user))
}
