//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod category_repository;
pub(crate) mod entities;
mod product_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use product_repository::{ProductRepository, ProductStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
