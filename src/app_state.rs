//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, UserStore};

/// The state of the REST server.
///
/// Constructed once at start-up and cloned into every request handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The store holding every user and their transactions.
    pub store: Arc<Mutex<UserStore>>,
}

impl AppState {
    /// Create a new [AppState] that serves `store`.
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store for the duration of a request.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock was poisoned.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, UserStore>, Error> {
        self.store.lock().map_err(|error| {
            tracing::error!("could not acquire store lock: {error}");
            Error::StoreLockError
        })
    }
}
