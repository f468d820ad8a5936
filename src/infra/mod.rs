//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and the sea-orm backed repositories.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{CategoryRepository, CategoryStore, ProductRepository, ProductStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCategoryRepository, MockProductRepository};
