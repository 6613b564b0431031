//! A small REST API for managing users and their financial transactions.
//!
//! Users and transactions live in an in-memory [UserStore] that is created
//! once at start-up and shared with every request handler through [AppState].
//! Nothing is persisted across restarts.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod balance;
mod endpoints;
mod error;
mod json;
mod logging;
mod routing;
mod store;
#[cfg(test)]
mod test_utils;
mod transaction;
mod user;
mod user_id_guard;

pub use app_state::AppState;
pub use balance::{Balance, compute_balance};
pub use error::{Error, ErrorBody};
pub use logging::logging_middleware;
pub use routing::build_router;
pub use store::UserStore;
pub use transaction::{
    Transaction, TransactionData, TransactionId, TransactionList, TransactionType,
};
pub use user::{User, UserData, UserDetails, UserId, UserSummary};
pub use user_id_guard::{is_valid_user_id, user_id_guard};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
