use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::StatusMessage;
use serde::{Deserialize, Serialize};
use service::company::domain::{CompanyDetail, CompanyInput, CompanyRecord, CompanySummary};
use service::errors::ServiceError;
use tracing::info;

use crate::{errors::JsonApiError, observability, routes::ServerState};

#[derive(Debug, Serialize, Deserialize)]
pub struct CompaniesBody {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyBody<T> {
    pub company: T,
}

/// An unreadable request body counts as invalid input.
fn invalid_body(rejection: JsonRejection) -> ServiceError {
    ServiceError::Validation(format!("request body: {}", rejection.body_text()))
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    responses(
        (status = 200, description = "List OK", body = crate::openapi::CompaniesBodyDoc),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<CompaniesBody>, JsonApiError> {
    let res = state.companies.list().await;
    observability::record("list", &res);
    let companies = res?;
    info!(count = companies.len(), "list companies");
    Ok(Json(CompaniesBody { companies }))
}

#[utoipa::path(
    get, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDetailBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyBody<CompanyDetail>>, JsonApiError> {
    let res = state.companies.get_one(&code).await;
    observability::record("get", &res);
    Ok(Json(CompanyBody { company: res? }))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CompanyInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CompanyRecordBodyDoc),
        (status = 500, description = "Validation Error or Conflict", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyBody<CompanyRecord>>), JsonApiError> {
    let res = match body {
        Ok(Json(input)) => state.companies.create(input).await,
        Err(rejection) => Err(invalid_body(rejection)),
    };
    observability::record("create", &res);
    let company = res?;
    info!(code = %company.code, "created company");
    Ok((StatusCode::CREATED, Json(CompanyBody { company })))
}

#[utoipa::path(
    put, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    request_body = crate::openapi::CompanyInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyRecordBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    body: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<Json<CompanyBody<CompanyRecord>>, JsonApiError> {
    let res = match body {
        Ok(Json(input)) => state.companies.update(&code, input).await,
        // an unknown company is reported ahead of an unreadable body
        Err(rejection) => match state.companies.get_one(&code).await {
            Ok(_) => Err(invalid_body(rejection)),
            Err(e) => Err(e),
        },
    };
    observability::record("update", &res);
    let company = res?;
    info!(code = %company.code, "updated company");
    Ok(Json(CompanyBody { company }))
}

#[utoipa::path(
    delete, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::StatusBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<StatusMessage>, JsonApiError> {
    let res = state.companies.delete(&code).await;
    observability::record("delete", &res);
    res?;
    info!(code = %code, "deleted company");
    Ok(Json(StatusMessage::deleted()))
}
