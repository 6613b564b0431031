//! The API endpoints URIs.
//!
//! Parameters use axum's `{name}` syntax, e.g., '/users/{user_id}'.

/// The route for creating and listing users.
pub const USERS: &str = "/users";
/// The route to access a single user.
pub const USER: &str = "/users/{user_id}";
/// The route for listing a user's transactions along with their balance.
pub const USER_TRANSACTIONS: &str = "/users/{user_id}/transactions";
/// The route for updating or deleting a single transaction.
pub const USER_TRANSACTION: &str = "/users/{user_id}/transactions/{transaction_id}";
/// The route for creating a transaction for a user.
pub const NEW_TRANSACTION: &str = "/user/{user_id}/transactions";
/// The route for getting a single transaction.
pub const TRANSACTION: &str = "/user/{user_id}/transactions/{transaction_id}";
