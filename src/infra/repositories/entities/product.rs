//! Product database entity for SeaORM.
//!
//! Only the columns the catalog reads or writes are mapped.

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;

use crate::domain::{ProductNameRef, ProductSlugRef};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// `SELECT id, slug` projection
#[derive(Debug, FromQueryResult)]
pub struct SlugRow {
    pub id: Uuid,
    pub slug: String,
}

/// `SELECT id, name` projection
#[derive(Debug, FromQueryResult)]
pub struct NameRow {
    pub id: Uuid,
    pub name: String,
}

impl From<SlugRow> for ProductSlugRef {
    fn from(row: SlugRow) -> Self {
        ProductSlugRef {
            id: row.id,
            slug: row.slug,
        }
    }
}

impl From<NameRow> for ProductNameRef {
    fn from(row: NameRow) -> Self {
        ProductNameRef {
            id: row.id,
            name: row.name,
        }
    }
}
