//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, never on
//! sea-orm directly.

mod auth_gate;
mod category_service;
pub mod container;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_gate::{AuthGate, Claims, JwtGate, TokenResponse};
pub use category_service::{CategoryManager, CategoryService};
