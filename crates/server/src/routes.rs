use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use common::types::Health;
use sea_orm::DatabaseConnection;
use service::company::{repo::seaorm::SeaOrmCompanyRepository, CompanyService};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::{errors::JsonApiError, observability, openapi::ApiDoc};

pub mod companies;

pub type Companies = CompanyService<SeaOrmCompanyRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub companies: Arc<Companies>,
}

impl ServerState {
    /// Wire the SeaORM repository and company service around a connection.
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmCompanyRepository::new(db));
        Self { companies: Arc::new(CompanyService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found(uri: Uri) -> JsonApiError {
    JsonApiError::not_found(Some(format!("no route for {}", uri.path())))
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/companies", get(companies::list).post(companies::create))
        .route(
            "/companies/:code",
            get(companies::get).put(companies::update).delete(companies::delete),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
