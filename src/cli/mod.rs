//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `token` - Mint a bearer token for the admin routes

pub mod args;

pub use args::{Cli, Commands};
