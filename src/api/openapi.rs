//! OpenAPI documentation configuration.
//!
//! The generated document is served as JSON at `/api-docs/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::category_handler;
use crate::domain::{
    Category, CategoryChanges, CategoryDetail, CategoryListing, CreateCategory, DeleteSummary,
    ProductNameRef, ProductSlugRef,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the storefront catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront Catalog API",
        version = "0.1.0",
        description = "Category management for the storefront, backed by PostgreSQL",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        category_handler::add_category,
        category_handler::list_active_categories,
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::update_category,
        category_handler::set_category_active,
        category_handler::delete_category,
    ),
    components(
        schemas(
            // Domain types
            Category,
            CategoryListing,
            CategoryDetail,
            CreateCategory,
            CategoryChanges,
            DeleteSummary,
            ProductSlugRef,
            ProductNameRef,
            // Handler types
            category_handler::CategoryPatch,
            category_handler::UpdateCategoryRequest,
            category_handler::AddCategoryResponse,
            category_handler::DeleteCategoryResponse,
            category_handler::CategoryListResponse,
            category_handler::CategoryListingResponse,
            category_handler::CategoryDetailResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Categories", description = "Catalog category management")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin JWT, e.g. from `storefront-api token`"))
                        .build(),
                ),
            );
        }
    }
}
