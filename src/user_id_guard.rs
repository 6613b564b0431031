//! Middleware that rejects requests whose user ID path segment is not a UUID.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::{Uuid, Variant};

use crate::Error;

/// The path prefixes that are followed by a user ID.
const USER_ID_PREFIXES: [&str; 2] = ["users", "user"];

/// The length of a hyphenated UUID string, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
const HYPHENATED_UUID_LENGTH: usize = 36;

/// Respond with 400 Bad Request if the segment after `/users/` or `/user/` is
/// not a valid user ID, see [is_valid_user_id].
///
/// Applies to every path under those prefixes, whether or not a route matches.
/// A valid ID with uppercase hex digits gets 404 Not Found straight away, since
/// IDs are always stored in lowercase and so no user can have it.
pub async fn user_id_guard(request: Request, next: Next) -> Response {
    if let Some(user_id) = user_id_segment(request.uri().path()) {
        if !is_valid_user_id(user_id) {
            return Error::InvalidUserId(user_id.to_owned()).into_response();
        }

        if user_id.chars().any(|c| c.is_ascii_uppercase()) {
            return Error::UserNotFound.into_response();
        }
    }

    next.run(request).await
}

/// Whether `id` is a hyphenated RFC 4122 UUID of version 1 to 5, or the nil UUID.
///
/// Hex digits may be of either case.
pub fn is_valid_user_id(id: &str) -> bool {
    if id.len() != HYPHENATED_UUID_LENGTH {
        return false;
    }

    match Uuid::try_parse(id) {
        Ok(uuid) => {
            uuid.is_nil()
                || ((1..=5).contains(&uuid.get_version_num())
                    && uuid.get_variant() == Variant::RFC4122)
        }
        Err(_) => false,
    }
}

fn user_id_segment(path: &str) -> Option<&str> {
    let mut segments = path.trim_start_matches('/').split('/');

    match (segments.next(), segments.next()) {
        (Some(prefix), Some(user_id))
            if USER_ID_PREFIXES.contains(&prefix) && !user_id.is_empty() =>
        {
            Some(user_id)
        }
        _ => None,
    }
}
