//! Domain layer - Core business entities and logic
//!
//! Categories, the product references they hold, and the caller identity
//! the auth gate produces. No infrastructure dependencies beyond error types.

pub mod category;
pub mod identity;
pub mod product;

pub use category::{
    is_valid_slug, validate_slug, Category, CategoryChanges, CategoryDetail, CategoryListing,
    CreateCategory, DeleteSummary, NewCategory,
};
pub use identity::{Identity, Role};
pub use product::{ProductNameRef, ProductSlugRef};
