use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Create/update payload; absent fields deserialize to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CompanyInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: Some(name.into()), description: Some(description.into()) }
    }

    /// Both fields are required and must not be blank.
    pub fn validate(&self) -> Result<CompanyFields, ServiceError> {
        let name = self.name.as_deref().ok_or_else(|| ServiceError::Validation("name required".into()))?;
        models::company::validate_name(name)?;
        let description = self
            .description
            .as_deref()
            .ok_or_else(|| ServiceError::Validation("description required".into()))?;
        models::company::validate_description(description)?;
        Ok(CompanyFields { name: name.to_string(), description: description.to_string() })
    }
}

/// Validated mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyFields {
    pub name: String,
    pub description: String,
}

/// Listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<models::company::Summary> for CompanySummary {
    fn from(s: models::company::Summary) -> Self { Self { code: s.code, name: s.name } }
}

/// Full company view with the ids of its invoices, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

/// Result of a create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub code: String,
    pub name: String,
    pub description: String,
}
