//! Token command - Mints a bearer token for operators.

use uuid::Uuid;

use crate::cli::args::TokenArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::services::JwtGate;

/// Execute the token command
pub async fn execute(args: TokenArgs, config: Config) -> AppResult<()> {
    let subject = args.subject.unwrap_or_else(Uuid::new_v4);
    let token = JwtGate::new(config).issue(subject, &args.email, args.role)?;

    tracing::info!(subject = %subject, role = %args.role, expires_in = token.expires_in, "Token issued");
    println!("{}", token.access_token);

    Ok(())
}
