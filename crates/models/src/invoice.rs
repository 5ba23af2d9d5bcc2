use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::company;

/// Invoices are owned elsewhere; companies only read their ids.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub comp_code: String,
    #[sea_orm(column_type = "Double")]
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Company }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompCode)
                .to(company::Column::Code)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}
