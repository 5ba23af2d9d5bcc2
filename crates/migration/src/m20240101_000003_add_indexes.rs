//! Secondary indexes.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // company detail reads join invoices on comp_code
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_invoices_comp_code")
                    .table(Invoices::Table)
                    .col(Invoices::CompCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_invoices_comp_code").table(Invoices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Invoices { Table, CompCode }
