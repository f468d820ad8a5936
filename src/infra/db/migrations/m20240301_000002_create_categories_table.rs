//! Migration: Create the categories table.
//!
//! `products` is a plain UUID array without a foreign key; references may
//! outlive the products they point to.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Categories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Description).text().not_null())
                    // Nullable and unique: any number of categories may lack a slug
                    .col(ColumnDef::new(Categories::Slug).string().null().unique_key())
                    .col(
                        ColumnDef::new(Categories::Products)
                            .array(ColumnType::Uuid)
                            .not_null()
                            .default(Expr::cust("'{}'::uuid[]")),
                    )
                    .col(
                        ColumnDef::new(Categories::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Categories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Public listing filters on the active flag
        manager
            .create_index(
                Index::create()
                    .name("idx_categories_is_active")
                    .table(Categories::Table)
                    .col(Categories::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_categories_is_active")
                    .table(Categories::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
    Slug,
    Products,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
