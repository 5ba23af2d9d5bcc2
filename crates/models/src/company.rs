use sea_orm::{entity::prelude::*, FromQueryResult};
use serde::{Deserialize, Serialize};

use crate::{errors, invoice};

pub const NAME_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Invoice }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Invoice => Entity::has_many(invoice::Entity).into(),
        }
    }
}

impl Related<invoice::Entity> for Entity {
    fn to() -> RelationDef { Relation::Invoice.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// `code` + `name` projection used by listings.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct Summary {
    pub code: String,
    pub name: String,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("name longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), errors::ModelError> {
    if description.trim().is_empty() {
        return Err(errors::ModelError::Validation("description required".into()));
    }
    Ok(())
}
