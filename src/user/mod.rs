mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

pub use core::{User, UserData, UserDetails, UserId, UserSummary};
pub use create_endpoint::create_user_endpoint;
pub use delete_endpoint::delete_user_endpoint;
pub use edit_endpoint::edit_user_endpoint;
pub use get_endpoint::get_user_endpoint;
pub use list_endpoint::list_users_endpoint;
