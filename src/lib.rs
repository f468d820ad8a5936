//! Storefront catalog API
//!
//! Category management for an e-commerce storefront: public listings,
//! admin-only mutations behind a JWT gate, and product deactivation when a
//! category is switched off.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Categories, product references and caller identity
//! - **services**: Category use cases and the auth gate
//! - **infra**: PostgreSQL connection, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response bodies
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Mint an admin token
//! cargo run -- token --email ops@example.com
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Category, Identity, Role};
pub use errors::{AppError, AppResult};
