//! Category handlers.
//!
//! Reads are public. Every mutation takes an [`AdminUser`] so the auth gate
//! runs before the path or body is looked at.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::{PathId, ValidatedJson};
use crate::api::middleware::AdminUser;
use crate::api::AppState;
use crate::config::{MSG_CATEGORY_ADDED, MSG_CATEGORY_DELETED, MSG_CATEGORY_UPDATED};
use crate::domain::{
    validate_slug, Category, CategoryChanges, CategoryDetail, CategoryListing, CreateCategory,
    DeleteSummary,
};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Fields an admin may change on a category
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    #[schema(example = "Shoes")]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty."))]
    #[schema(example = "Footwear")]
    pub description: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    #[schema(example = "shoes")]
    pub slug: Option<String>,
    pub products: Option<Vec<Uuid>>,
    pub is_active: Option<bool>,
}

impl From<CategoryPatch> for CategoryChanges {
    fn from(patch: CategoryPatch) -> Self {
        Self {
            name: patch.name,
            description: patch.description,
            slug: patch.slug,
            products: patch.products,
            is_active: patch.is_active,
        }
    }
}

/// Update and set-active request envelope
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(nested)]
    pub category: CategoryPatch,
}

/// Response for a created category
#[derive(Debug, Serialize, ToSchema)]
pub struct AddCategoryResponse {
    pub success: bool,
    #[schema(example = "Category has been added successfully!")]
    pub message: String,
    pub category: Category,
}

/// Response for a delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteCategoryResponse {
    pub success: bool,
    #[schema(example = "Category has been deleted successfully!")]
    pub message: String,
    pub category: DeleteSummary,
}

/// Active categories
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

/// All categories with product slugs
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListingResponse {
    pub categories: Vec<CategoryListing>,
}

/// One category with product names
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDetailResponse {
    pub category: CategoryDetail,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_category))
        .route("/list", get(list_active_categories))
        .route("/", get(list_categories))
        .route("/:id", get(get_category).put(update_category))
        .route("/:id/active", put(set_category_active))
        .route("/delete/:id", delete(delete_category))
}

/// Add a new category
#[utoipa::path(
    post,
    path = "/api/category/add",
    tag = "Categories",
    request_body = CreateCategory,
    responses(
        (status = 200, description = "Category created", body = AddCategoryResponse),
        (status = 400, description = "Missing name or description"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_category(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(payload): ValidatedJson<CreateCategory>,
) -> AppResult<Json<AddCategoryResponse>> {
    let category = state.categories.add(payload).await?;

    Ok(Json(AddCategoryResponse {
        success: true,
        message: MSG_CATEGORY_ADDED.to_string(),
        category,
    }))
}

/// List active categories
#[utoipa::path(
    get,
    path = "/api/category/list",
    tag = "Categories",
    responses(
        (status = 200, description = "Active categories", body = CategoryListResponse)
    )
)]
pub async fn list_active_categories(
    State(state): State<AppState>,
) -> AppResult<Json<CategoryListResponse>> {
    let categories = state.categories.list_active().await?;
    Ok(Json(CategoryListResponse { categories }))
}

/// List every category with product slugs
#[utoipa::path(
    get,
    path = "/api/category",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = CategoryListingResponse)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<CategoryListingResponse>> {
    let categories = state.categories.list_all().await?;
    Ok(Json(CategoryListingResponse { categories }))
}

/// Get a category with product names
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = CategoryDetailResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No such category")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<CategoryDetailResponse>> {
    let category = state.categories.get_by_id(id).await?;
    Ok(Json(CategoryDetailResponse { category }))
}

/// Update category fields
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = MessageResponse),
        (status = 400, description = "Validation error or slug in use"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_category(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Json<MessageResponse>> {
    tracing::debug!(user_id = %admin.id, category_id = %id, "Updating category");
    state.categories.update(id, payload.category.into()).await?;

    Ok(Json(MessageResponse::new(MSG_CATEGORY_UPDATED)))
}

/// Activate or deactivate a category
///
/// Deactivating an active category also deactivates its products.
#[utoipa::path(
    put,
    path = "/api/category/{id}/active",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = MessageResponse),
        (status = 400, description = "isActive missing or processing failure"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn set_category_active(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Json<MessageResponse>> {
    tracing::debug!(user_id = %admin.id, category_id = %id, "Setting category active flag");
    state.categories.set_active(id, payload.category.into()).await?;

    Ok(Json(MessageResponse::new(MSG_CATEGORY_UPDATED)))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/category/delete/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteCategoryResponse),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_category(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    PathId(id): PathId,
) -> AppResult<Json<DeleteCategoryResponse>> {
    tracing::debug!(user_id = %admin.id, category_id = %id, "Deleting category");
    let summary = state.categories.delete(id).await?;

    Ok(Json(DeleteCategoryResponse {
        success: true,
        message: MSG_CATEGORY_DELETED.to_string(),
        category: summary,
    }))
}
