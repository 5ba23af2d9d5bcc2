//! Create `invoices` table.
//! Invoices hang off a company through `comp_code` and go away with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoices::Id))
                    .col(string_len(Invoices::CompCode, 64).not_null())
                    .col(double(Invoices::Amt).not_null())
                    .col(boolean(Invoices::Paid).not_null().default(false))
                    .col(date(Invoices::AddDate).not_null())
                    .col(date_null(Invoices::PaidDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_company")
                            .from(Invoices::Table, Invoices::CompCode)
                            .to(Companies::Table, Companies::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Invoices::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Invoices {
    Table,
    Id,
    CompCode,
    Amt,
    Paid,
    AddDate,
    PaidDate,
}

#[derive(DeriveIden)]
enum Companies { Table, Code }
