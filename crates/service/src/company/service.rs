use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::code::derive_code;
use super::domain::{CompanyDetail, CompanyInput, CompanyRecord, CompanySummary};
use super::repository::CompanyRepository;
use crate::errors::ServiceError;

/// Maps a company name to its code.
pub type CodeGenerator = fn(&str) -> String;

/// Company business service independent of web framework
pub struct CompanyService<R: CompanyRepository> {
    repo: Arc<R>,
    code_gen: CodeGenerator,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, code_gen: derive_code } }

    /// Replace the code derivation, e.g. to force collisions in tests.
    pub fn with_code_generator(mut self, code_gen: CodeGenerator) -> Self {
        self.code_gen = code_gen;
        self
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CompanySummary>, ServiceError> {
        let companies = self.repo.list_all().await?;
        info!(count = companies.len(), "companies_listed");
        Ok(companies)
    }

    #[instrument(skip(self))]
    pub async fn get_one(&self, code: &str) -> Result<CompanyDetail, ServiceError> {
        let company = self
            .repo
            .get_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::not_found("company"))?;
        info!(code = %company.code, invoices = company.invoices.len(), "company_fetched");
        Ok(company)
    }

    /// Validate, derive the code from the name and insert.
    ///
    /// # Examples
    /// ```
    /// use service::company::{CompanyService, domain::CompanyInput, repository::mock::MockCompanyRepository};
    /// use std::sync::Arc;
    /// let svc = CompanyService::new(Arc::new(MockCompanyRepository::default()));
    /// let created = tokio_test::block_on(svc.create(CompanyInput::new("Amazon", "AWS Systems"))).unwrap();
    /// assert_eq!(created.code, "amazon");
    /// assert_eq!(created.description, "AWS Systems");
    /// ```
    #[instrument(skip(self, input), fields(name = ?input.name))]
    pub async fn create(&self, input: CompanyInput) -> Result<CompanyRecord, ServiceError> {
        let fields = input.validate()?;
        let code = (self.code_gen)(&fields.name);
        match self.repo.insert(&code, &fields.name, &fields.description).await {
            Ok(created) => {
                info!(code = %created.code, "company_created");
                Ok(created)
            }
            Err(ServiceError::Conflict(detail)) => {
                warn!(code = %code, %detail, "company_code_conflict");
                Err(ServiceError::Conflict(format!("company code '{code}' already exists")))
            }
            Err(e) => Err(e),
        }
    }

    /// Replace name and description; the code never changes.
    ///
    /// # Examples
    /// ```
    /// use service::company::{CompanyService, domain::CompanyInput, repository::mock::MockCompanyRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockCompanyRepository::default());
    /// repo.seed_company("apple", "Apple", Some("Maker of OSX."));
    /// let svc = CompanyService::new(repo);
    /// let updated = tokio_test::block_on(svc.update("apple", CompanyInput::new("AppleEdit", "NewDescrip"))).unwrap();
    /// assert_eq!(updated.code, "apple");
    /// let missing = tokio_test::block_on(svc.update("Meta", CompanyInput::new("Meta", "x")));
    /// assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    /// ```
    #[instrument(skip(self, input))]
    pub async fn update(&self, code: &str, input: CompanyInput) -> Result<CompanyRecord, ServiceError> {
        let fields = match input.validate() {
            Ok(fields) => fields,
            Err(invalid) => {
                // an unknown company is reported as missing before its input is judged
                if self.repo.get_by_code(code).await?.is_none() {
                    return Err(ServiceError::not_found("company"));
                }
                return Err(invalid);
            }
        };
        let updated = self
            .repo
            .update(code, &fields.name, &fields.description)
            .await?
            .ok_or_else(|| ServiceError::not_found("company"))?;
        info!(code = %updated.code, "company_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, code: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(code).await? {
            return Err(ServiceError::not_found("company"));
        }
        info!(code, "company_deleted");
        Ok(())
    }
}
