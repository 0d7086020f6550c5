//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::CustomerStore;
use crate::services::RegistrationService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It is built once in `main`
/// from an explicitly constructed store and handed to the router with
/// `with_state`; there is no process-wide connection pool.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    registration: RegistrationService,
}

impl AppState {
    /// Create a new application state around a customer store.
    #[must_use]
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                registration: RegistrationService::new(store),
            }),
        }
    }

    /// Get a reference to the registration service.
    #[must_use]
    pub fn registration(&self) -> &RegistrationService {
        &self.inner.registration
    }

    /// Get a reference to the customer store.
    #[must_use]
    pub fn store(&self) -> &dyn CustomerStore {
        self.inner.registration.store()
    }
}
