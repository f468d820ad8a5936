//! API middleware and request guards.

mod auth;

pub use auth::AdminUser;
