//! Category service - Catalog category use cases.
//!
//! Handlers stay thin; everything here is a handful of sequential store
//! calls. Nothing is transactional: the slug pre-check is backed by the
//! unique index, and the deactivation cascade runs before the category is
//! touched so a failed cascade leaves it unchanged.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::{MSG_IS_ACTIVE_REQUIRED, MSG_SLUG_IN_USE};
use crate::domain::{
    Category, CategoryChanges, CategoryDetail, CategoryListing, CreateCategory, DeleteSummary,
    NewCategory,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{CategoryRepository, ProductRepository};

/// Category service trait for dependency injection.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Create a category (`name` and `description` required)
    async fn add(&self, input: CreateCategory) -> AppResult<Category>;

    /// Categories visible in the storefront
    async fn list_active(&self) -> AppResult<Vec<Category>>;

    /// Every category, products reduced to `{id, slug}`
    async fn list_all(&self) -> AppResult<Vec<CategoryListing>>;

    /// One category, products reduced to `{id, name}`
    async fn get_by_id(&self, id: Uuid) -> AppResult<CategoryDetail>;

    /// Partial update with slug uniqueness check
    async fn update(&self, id: Uuid, changes: CategoryChanges) -> AppResult<()>;

    /// Toggle the active flag, disabling member products on deactivation
    async fn set_active(&self, id: Uuid, changes: CategoryChanges) -> AppResult<()>;

    /// Hard delete; unknown ids are acknowledged with a zero count
    async fn delete(&self, id: Uuid) -> AppResult<DeleteSummary>;
}

/// Concrete implementation of CategoryService using repositories.
pub struct CategoryManager {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CategoryManager {
    /// Create new category service instance with repositories
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }

    async fn ensure_slug_available(&self, id: Uuid, slug: &str) -> AppResult<()> {
        match self.categories.find_by_slug(slug).await? {
            Some(holder) if holder.id != id => Err(AppError::conflict(MSG_SLUG_IN_USE)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn add(&self, input: CreateCategory) -> AppResult<Category> {
        let new_category = NewCategory::try_from(input)?;
        let category = self.categories.create(new_category).await?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category added");
        Ok(category)
    }

    async fn list_active(&self) -> AppResult<Vec<Category>> {
        self.categories.list_active().await
    }

    async fn list_all(&self) -> AppResult<Vec<CategoryListing>> {
        let categories = self.categories.list().await?;

        let mut ids: Vec<Uuid> = categories
            .iter()
            .flat_map(|c| c.products.iter().copied())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let lookup: HashMap<_, _> = self
            .products
            .find_slug_refs(&ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(categories
            .into_iter()
            .map(|c| c.into_listing(&lookup))
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<CategoryDetail> {
        let category = self.categories.find_by_id(id).await?.ok_or_not_found()?;

        let lookup: HashMap<_, _> = self
            .products
            .find_name_refs(&category.products)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(category.into_detail(&lookup))
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> AppResult<()> {
        if let Some(slug) = changes.slug.as_deref() {
            self.ensure_slug_available(id, slug).await?;
        }

        let touched = self.categories.update(id, changes).await?;
        tracing::info!(category_id = %id, touched, "Category updated");
        Ok(())
    }

    async fn set_active(&self, id: Uuid, changes: CategoryChanges) -> AppResult<()> {
        let is_active = changes
            .is_active
            .ok_or_else(|| AppError::validation(MSG_IS_ACTIVE_REQUIRED))?;

        // Reject a taken slug before any product is touched
        if let Some(slug) = changes.slug.as_deref() {
            self.ensure_slug_available(id, slug).await?;
        }

        if !is_active {
            // Only a currently active category cascades
            if let Some(category) = self.categories.find_active_by_id(id).await? {
                let disabled = self.products.disable_many(&category.products).await?;
                tracing::info!(category_id = %id, disabled, "Category products disabled");
            }
        }

        let touched = self.categories.update(id, changes).await?;
        tracing::info!(category_id = %id, is_active, touched, "Category active flag set");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<DeleteSummary> {
        let deleted = self.categories.delete(id).await?;
        tracing::info!(category_id = %id, deleted, "Category deleted");
        Ok(DeleteSummary::new(deleted))
    }
}
