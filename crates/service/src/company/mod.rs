//! Company resource: three-layer architecture (domain, repository, service).
//!
//! `code` derives identifiers, `repo::seaorm` is the database-backed repository.

pub mod code;
pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CompanyService;
