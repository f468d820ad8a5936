//! Auth gate - Bearer token verification and role checks.
//!
//! Tokens are HS256 JWTs carrying the caller id, email and role. Issuing
//! lives here too so the CLI and tests mint tokens the gate accepts.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Identity, Role};
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            role: Role::from(claims.role.as_str()),
            email: claims.email,
        }
    }
}

/// Freshly issued access token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiration time in seconds
    pub expires_in: i64,
}

/// Gate in front of the privileged category routes.
pub trait AuthGate: Send + Sync {
    /// Verify a bearer token and resolve the caller
    fn authenticate(&self, token: &str) -> AppResult<Identity>;

    /// Require the caller to hold `required`
    fn authorize(&self, identity: &Identity, required: Role) -> AppResult<()> {
        if identity.role.can_access(required) {
            Ok(())
        } else {
            tracing::warn!(user_id = %identity.id, role = %identity.role, "Role check failed");
            Err(AppError::Forbidden)
        }
    }
}

/// HS256 JWT implementation of [`AuthGate`].
pub struct JwtGate {
    config: Config,
}

impl JwtGate {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Mint a token for the given caller
    pub fn issue(&self, id: Uuid, email: &str, role: Role) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: id,
            email: email.to_string(),
            role: role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.jwt_expiration_hours * SECONDS_PER_HOUR,
        })
    }
}

impl AuthGate for JwtGate {
    fn authenticate(&self, token: &str) -> AppResult<Identity> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(Identity::from(token_data.claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-that-is-at-least-32-characters";

    fn gate() -> JwtGate {
        JwtGate::new(Config::new("postgres://localhost/test", SECRET).unwrap())
    }

    #[test]
    fn issued_token_authenticates() {
        let gate = gate();
        let id = Uuid::new_v4();
        let token = gate.issue(id, "admin@example.com", Role::Admin).unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 24 * 3600);

        let identity = gate.authenticate(&token.access_token).unwrap();
        assert_eq!(identity.id, id);
        assert_eq!(identity.email, "admin@example.com");
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        let err = gate().authenticate("not-a-jwt").unwrap_err();
        assert!(matches!(err, AppError::Jwt(_)));
        assert_eq!(err.status(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = JwtGate::new(
            Config::new(
                "postgres://localhost/test",
                "another-secret-key-with-plenty-of-characters",
            )
            .unwrap(),
        );
        let token = other.issue(Uuid::new_v4(), "a@b.c", Role::Admin).unwrap();

        assert!(gate().authenticate(&token.access_token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "admin@example.com".into(),
            role: "admin".into(),
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
            iat: (Utc::now() - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(gate().authenticate(&token).is_err());
    }

    #[test]
    fn authorize_checks_role() {
        let gate = gate();
        let member = Identity {
            id: Uuid::new_v4(),
            email: "m@example.com".into(),
            role: Role::Member,
        };
        let admin = Identity {
            role: Role::Admin,
            ..member.clone()
        };

        assert!(matches!(
            gate.authorize(&member, Role::Admin),
            Err(AppError::Forbidden)
        ));
        assert!(gate.authorize(&admin, Role::Admin).is_ok());
    }
}
