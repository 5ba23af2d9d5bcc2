use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use models::{company, invoice};

use crate::company::domain::{CompanyDetail, CompanyRecord, CompanySummary};
use crate::company::repository::CompanyRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list_all(&self) -> Result<Vec<CompanySummary>, ServiceError> {
        let rows = company::Entity::find()
            .select_only()
            .column(company::Column::Code)
            .column(company::Column::Name)
            .order_by_asc(company::Column::Code)
            .into_model::<company::Summary>()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(CompanySummary::from).collect())
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<CompanyDetail>, ServiceError> {
        // one LEFT JOIN; invoice ids are read fresh on every call
        let rows = company::Entity::find_by_id(code.to_string())
            .find_with_related(invoice::Entity)
            .order_by_asc(invoice::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().next().map(|(c, invoices)| CompanyDetail {
            code: c.code,
            name: c.name,
            description: c.description,
            invoices: invoices.into_iter().map(|i| i.id).collect(),
        }))
    }

    async fn insert(&self, code: &str, name: &str, description: &str) -> Result<CompanyRecord, ServiceError> {
        let am = company::ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
        };
        let created = am.insert(&self.db).await?;
        Ok(CompanyRecord {
            code: created.code,
            name: created.name,
            description: created.description.unwrap_or_default(),
        })
    }

    async fn update(&self, code: &str, name: &str, description: &str) -> Result<Option<CompanyRecord>, ServiceError> {
        let res = company::Entity::update_many()
            .col_expr(company::Column::Name, Expr::value(name.to_string()))
            .col_expr(company::Column::Description, Expr::value(description.to_string()))
            .filter(company::Column::Code.eq(code))
            .exec(&self.db)
            .await?;
        debug!(code, rows_affected = res.rows_affected, "company_update_exec");
        if res.rows_affected == 0 {
            return Ok(None);
        }
        Ok(Some(CompanyRecord { code: code.to_string(), name: name.to_string(), description: description.to_string() }))
    }

    async fn delete(&self, code: &str) -> Result<bool, ServiceError> {
        let res = company::Entity::delete_by_id(code.to_string()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
