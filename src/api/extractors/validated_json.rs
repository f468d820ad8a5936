//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Unparseable bodies are bad requests; bodies that parse but fail
/// validation are reported with the first field messages.
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct RenameRequest {
///     #[validate(length(min = 1, message = "Name is required"))]
///     name: String,
/// }
///
/// async fn rename(ValidatedJson(payload): ValidatedJson<RenameRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e).join(", ")))?;

        Ok(ValidatedJson(value))
    }
}

/// Collect field messages, descending into nested structs
fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect(),
            ValidationErrorsKind::Struct(inner) => format_validation_errors(inner),
            ValidationErrorsKind::List(items) => items
                .values()
                .flat_map(|inner| format_validation_errors(inner))
                .collect(),
        })
        .collect()
}
