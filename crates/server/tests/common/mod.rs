#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tower::ServiceExt;

use models::{company, invoice};

/// Migrated in-memory database seeded with apple (two invoices) and ibm (no description).
pub async fn seeded_db() -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;

    company::ActiveModel {
        code: Set("apple".into()),
        name: Set("Apple".into()),
        description: Set(Some("Maker of OSX.".into())),
    }
    .insert(&db)
    .await?;
    company::ActiveModel { code: Set("ibm".into()), name: Set("IBM".into()), description: Set(None) }
        .insert(&db)
        .await?;

    for amt in [100.0, 200.0] {
        invoice::ActiveModel {
            comp_code: Set("apple".into()),
            amt: Set(amt),
            paid: Set(false),
            add_date: Set(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            paid_date: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }
    Ok(db)
}

pub async fn build_app() -> anyhow::Result<Router> {
    let db = seeded_db().await?;
    Ok(server::startup::build_app(db))
}

/// Send one request through the router and decode the JSON body (Null when empty).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}
