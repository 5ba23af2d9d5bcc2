use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::errors::ServiceError;

// Prometheus metrics (default registry)
pub static COMPANY_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "biztime_company_requests_total",
        "Company operations by outcome",
        &["operation", "outcome"]
    )
    .expect("register company_requests_total")
});

pub fn outcome<T>(res: &Result<T, ServiceError>) -> &'static str {
    match res {
        Ok(_) => "ok",
        Err(ServiceError::NotFound(_)) => "not_found",
        Err(ServiceError::Validation(_)) => "validation",
        Err(ServiceError::Conflict(_)) => "conflict",
        Err(ServiceError::Db(_)) => "db_error",
    }
}

/// Count one service call.
pub fn record<T>(operation: &str, res: &Result<T, ServiceError>) {
    COMPANY_REQUESTS_TOTAL.with_label_values(&[operation, outcome(res)]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
