//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AuthGate, CategoryService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Category use cases
    pub categories: Arc<dyn CategoryService>,
    /// Bearer token gate for admin routes
    pub auth: Arc<dyn AuthGate>,
    /// Database connection, used by the health probe
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::new(container.categories(), container.auth(), database)
    }

    /// Create new application state with manually injected services.
    pub fn new(
        categories: Arc<dyn CategoryService>,
        auth: Arc<dyn AuthGate>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            categories,
            auth,
            database,
        }
    }
}
