//! Bearer token guard for admin routes.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::api::AppState;
use crate::domain::{Identity, Role};
use crate::errors::AppError;

/// Caller proven to hold the admin role.
///
/// Taking this as a handler argument runs the auth gate before the body is
/// read: a missing or invalid token is rejected with 401, any other role
/// with 403.
#[derive(Clone, Debug)]
pub struct AdminUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized)?;

        let identity = state.auth.authenticate(bearer.token())?;
        state.auth.authorize(&identity, Role::Admin)?;

        tracing::debug!(user_id = %identity.id, "Admin request authorized");
        Ok(AdminUser(identity))
    }
}
