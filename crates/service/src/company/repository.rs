use async_trait::async_trait;

use super::domain::{CompanyDetail, CompanyRecord, CompanySummary};
use crate::errors::ServiceError;

/// Repository abstraction for company persistence.
///
/// Every method is a single statement against the store. Missing rows are
/// reported as `None`/`false`, never as errors; a duplicate code on insert is
/// `ServiceError::Conflict`.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<CompanySummary>, ServiceError>;
    async fn get_by_code(&self, code: &str) -> Result<Option<CompanyDetail>, ServiceError>;
    async fn insert(&self, code: &str, name: &str, description: &str) -> Result<CompanyRecord, ServiceError>;
    async fn update(&self, code: &str, name: &str, description: &str) -> Result<Option<CompanyRecord>, ServiceError>;
    async fn delete(&self, code: &str) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCompanyRepository {
        companies: Mutex<BTreeMap<String, (String, Option<String>)>>, // code -> (name, description)
        invoices: Mutex<BTreeMap<i32, String>>,                       // invoice id -> comp_code
        unavailable: AtomicBool,
    }

    impl MockCompanyRepository {
        pub fn seed_company(&self, code: &str, name: &str, description: Option<&str>) {
            self.companies
                .lock()
                .unwrap()
                .insert(code.to_string(), (name.to_string(), description.map(str::to_string)));
        }

        pub fn seed_invoice(&self, id: i32, comp_code: &str) {
            self.invoices.lock().unwrap().insert(id, comp_code.to_string());
        }

        /// Make every following call fail as if the store were down.
        pub fn set_unavailable(&self, down: bool) {
            self.unavailable.store(down, Ordering::SeqCst);
        }

        pub fn len(&self) -> usize {
            self.companies.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("store unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CompanyRepository for MockCompanyRepository {
        async fn list_all(&self) -> Result<Vec<CompanySummary>, ServiceError> {
            self.check()?;
            let companies = self.companies.lock().unwrap();
            Ok(companies
                .iter()
                .map(|(code, (name, _))| CompanySummary { code: code.clone(), name: name.clone() })
                .collect())
        }

        async fn get_by_code(&self, code: &str) -> Result<Option<CompanyDetail>, ServiceError> {
            self.check()?;
            let companies = self.companies.lock().unwrap();
            let Some((name, description)) = companies.get(code) else { return Ok(None) };
            let invoices = self
                .invoices
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, c)| c.as_str() == code)
                .map(|(id, _)| *id)
                .collect();
            Ok(Some(CompanyDetail {
                code: code.to_string(),
                name: name.clone(),
                description: description.clone(),
                invoices,
            }))
        }

        async fn insert(&self, code: &str, name: &str, description: &str) -> Result<CompanyRecord, ServiceError> {
            self.check()?;
            let mut companies = self.companies.lock().unwrap();
            if companies.contains_key(code) {
                return Err(ServiceError::Conflict(format!("duplicate key: {code}")));
            }
            companies.insert(code.to_string(), (name.to_string(), Some(description.to_string())));
            Ok(CompanyRecord { code: code.to_string(), name: name.to_string(), description: description.to_string() })
        }

        async fn update(&self, code: &str, name: &str, description: &str) -> Result<Option<CompanyRecord>, ServiceError> {
            self.check()?;
            let mut companies = self.companies.lock().unwrap();
            let Some(row) = companies.get_mut(code) else { return Ok(None) };
            *row = (name.to_string(), Some(description.to_string()));
            Ok(Some(CompanyRecord { code: code.to_string(), name: name.to_string(), description: description.to_string() }))
        }

        async fn delete(&self, code: &str) -> Result<bool, ServiceError> {
            self.check()?;
            let existed = self.companies.lock().unwrap().remove(code).is_some();
            if existed {
                self.invoices.lock().unwrap().retain(|_, c| c.as_str() != code);
            }
            Ok(existed)
        }
    }
}
