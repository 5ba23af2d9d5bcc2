#![cfg(test)]
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Fresh, migrated in-memory database; every call is isolated from the others.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_invoice(db: &DatabaseConnection, comp_code: &str, amt: f64) -> Result<i32, anyhow::Error> {
    let am = models::invoice::ActiveModel {
        comp_code: Set(comp_code.to_string()),
        amt: Set(amt),
        paid: Set(false),
        add_date: Set(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")),
        paid_date: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?.id)
}

/// Company row with a NULL description, which the repository itself never writes.
pub async fn seed_bare_company(db: &DatabaseConnection, code: &str, name: &str) -> Result<(), anyhow::Error> {
    models::company::ActiveModel {
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        description: Set(None),
    }
    .insert(db)
    .await?;
    Ok(())
}
