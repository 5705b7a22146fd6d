//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, MemoryUserStore, UserStore};
use crate::services::{Registrar, RegistrationService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration_service: Arc<dyn RegistrationService>,
    /// Database connection (`None` when running on the in-memory store)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the registration service to the PostgreSQL user store.
    pub fn from_database(database: Arc<Database>) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));

        Self {
            registration_service: Arc::new(Registrar::new(users)),
            database: Some(database),
        }
    }

    /// Wire the registration service to an in-memory user store.
    pub fn in_memory(store: Arc<MemoryUserStore>) -> Self {
        Self {
            registration_service: Arc::new(Registrar::new(store)),
            database: None,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        database: Option<Arc<Database>>,
    ) -> Self {
        Self {
            registration_service,
            database,
        }
    }
}
