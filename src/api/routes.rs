//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use sea_orm::DbErr;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::category_routes;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::CATEGORY_ROUTE_PREFIX;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(CATEGORY_ROUTE_PREFIX, category_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Storefront Catalog API"
}

/// Generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, response) = health_report(state.database.ping().await);
    (status_code, Json(response))
}

/// Database error detail goes to the log, never into the response
fn health_report(ping: Result<(), DbErr>) -> (StatusCode, HealthResponse) {
    let (status_code, database) = match ping {
        Ok(_) => (StatusCode::OK, ServiceStatus { status: "healthy" }),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ServiceStatus {
                    status: "unhealthy",
                },
            )
        }
    };

    let response = HealthResponse {
        status: if status_code == StatusCode::OK {
            "healthy"
        } else {
            "degraded"
        },
        services: ServiceHealth { database },
    };

    (status_code, response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn healthy_database_reports_ok() {
        let (status, report) = health_report(Ok(()));

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({"status": "healthy", "services": {"database": {"status": "healthy"}}})
        );
    }

    #[test]
    fn failed_ping_hides_connection_detail() {
        let err = DbErr::Custom("connection refused to postgres://admin:hunter2@db:5432".into());
        let (status, report) = health_report(Err(err));

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let body = serde_json::to_value(report).unwrap();
        assert_eq!(
            body,
            json!({"status": "degraded", "services": {"database": {"status": "unhealthy"}}})
        );
        assert!(!body.to_string().contains("hunter2"));
    }
}
