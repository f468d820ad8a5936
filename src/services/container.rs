//! Service container - Wires repositories into services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{AuthGate, CategoryManager, CategoryService, JwtGate};
use crate::config::Config;
use crate::infra::{CategoryStore, ProductStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get the category service
    fn categories(&self) -> Arc<dyn CategoryService>;

    /// Get the auth gate
    fn auth(&self) -> Arc<dyn AuthGate>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    category_service: Arc<dyn CategoryService>,
    auth_gate: Arc<dyn AuthGate>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: DatabaseConnection, config: Config) -> Self {
        let categories = Arc::new(CategoryStore::new(db.clone()));
        let products = Arc::new(ProductStore::new(db));

        Self {
            category_service: Arc::new(CategoryManager::new(categories, products)),
            auth_gate: Arc::new(JwtGate::new(config)),
        }
    }
}

impl ServiceContainer for Services {
    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthGate> {
        self.auth_gate.clone()
    }
}
