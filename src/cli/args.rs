//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::config::{
    is_valid_role, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, ROLE_ADMIN, VALID_ROLES,
};
use crate::domain::Role;

/// Storefront catalog API
#[derive(Parser, Debug)]
#[command(name = "storefront-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Print a signed bearer token
    Token(TokenArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the token command
#[derive(Parser, Debug)]
pub struct TokenArgs {
    /// Email embedded in the token
    #[arg(short, long)]
    pub email: String,

    /// Role granted by the token
    #[arg(short, long, default_value = ROLE_ADMIN, value_parser = parse_role)]
    pub role: Role,

    /// Subject id (random when omitted)
    #[arg(short, long)]
    pub subject: Option<Uuid>,
}

fn parse_role(value: &str) -> Result<Role, String> {
    if is_valid_role(value) {
        Ok(Role::from(value))
    } else {
        Err(format!("expected one of: {}", VALID_ROLES.join(", ")))
    }
}
