//! Category repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::category::{self, ActiveModel, Entity as CategoryEntity};
use crate::config::MSG_SLUG_IN_USE;
use crate::domain::{Category, CategoryChanges, NewCategory};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// Find category by ID, only if it is currently active
    async fn find_active_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// Find category holding the given slug
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>>;

    /// Insert a new category
    async fn create(&self, category: NewCategory) -> AppResult<Category>;

    /// Apply a partial update, returning the number of rows touched
    async fn update(&self, id: Uuid, changes: CategoryChanges) -> AppResult<u64>;

    /// Hard delete by ID, returning the number of rows removed
    async fn delete(&self, id: Uuid) -> AppResult<u64>;

    /// List active categories
    async fn list_active(&self) -> AppResult<Vec<Category>>;

    /// List all categories
    async fn list(&self) -> AppResult<Vec<Category>>;
}

/// Concrete implementation of CategoryRepository
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Surface a unique index violation on `slug` as a conflict.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(MSG_SLUG_IN_USE),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Category::from))
    }

    async fn find_active_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id)
            .filter(category::Column::IsActive.eq(true))
            .one(&self.db)
            .await?;

        Ok(result.map(Category::from))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;

        Ok(result.map(Category::from))
    }

    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(category.name),
            description: Set(category.description),
            slug: Set(None),
            products: Set(category.products),
            is_active: Set(category.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_err)?;
        Ok(Category::from(model))
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> AppResult<u64> {
        // Single UPDATE touching only the supplied columns; a missing row is not an error
        let mut active = ActiveModel {
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(slug) = changes.slug {
            active.slug = Set(Some(slug));
        }
        if let Some(products) = changes.products {
            active.products = Set(products);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }

        let result = CategoryEntity::update_many()
            .set(active)
            .filter(category::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_write_err)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = CategoryEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    async fn list_active(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .filter(category::Column::IsActive.eq(true))
            .order_by_asc(category::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .order_by_asc(category::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Category::from).collect())
    }
}
