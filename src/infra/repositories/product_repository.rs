//! Product store access used by the catalog.
//!
//! Covers the narrow slice of the product table categories depend on:
//! column-projected lookups for read views and the deactivation cascade.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

use super::entities::product::{self, Entity as ProductEntity, NameRow, SlugRow};
use crate::domain::{ProductNameRef, ProductSlugRef};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch `{id, slug}` for the given products (missing ids are skipped)
    async fn find_slug_refs(&self, ids: &[Uuid]) -> AppResult<Vec<ProductSlugRef>>;

    /// Fetch `{id, name}` for the given products (missing ids are skipped)
    async fn find_name_refs(&self, ids: &[Uuid]) -> AppResult<Vec<ProductNameRef>>;

    /// Mark every listed product inactive, returning the number of rows touched
    async fn disable_many(&self, ids: &[Uuid]) -> AppResult<u64>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_slug_refs(&self, ids: &[Uuid]) -> AppResult<Vec<ProductSlugRef>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = ProductEntity::find()
            .select_only()
            .column(product::Column::Id)
            .column(product::Column::Slug)
            .filter(product::Column::Id.is_in(ids.to_vec()))
            .into_model::<SlugRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(ProductSlugRef::from).collect())
    }

    async fn find_name_refs(&self, ids: &[Uuid]) -> AppResult<Vec<ProductNameRef>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = ProductEntity::find()
            .select_only()
            .column(product::Column::Id)
            .column(product::Column::Name)
            .filter(product::Column::Id.is_in(ids.to_vec()))
            .into_model::<NameRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(ProductNameRef::from).collect())
    }

    async fn disable_many(&self, ids: &[Uuid]) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = ProductEntity::update_many()
            .col_expr(product::Column::IsActive, Expr::value(false))
            .col_expr(product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(product::Column::Id.is_in(ids.to_vec()))
            .exec(&self.db)
            .await?;

        tracing::info!(requested = ids.len(), disabled = result.rows_affected, "Products disabled");
        Ok(result.rows_affected)
    }
}
