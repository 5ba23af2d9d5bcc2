//! Service layer for the company resource.
//! - Derives company codes and enforces input rules before touching the store.
//! - Talks to the database only through `CompanyRepository`.
//! - Reports outcomes as `ServiceError` variants the HTTP layer maps to statuses.

pub mod errors;
pub mod company;
#[cfg(test)]
pub mod test_support;
