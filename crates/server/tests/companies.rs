mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{build_app, send};

#[tokio::test]
async fn test_list_companies() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/companies", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"companies": [
            {"code": "apple", "name": "Apple"},
            {"code": "ibm", "name": "IBM"},
        ]})
    );
    Ok(())
}

#[tokio::test]
async fn test_get_company_with_invoices() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/companies/apple", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"company": {
            "code": "apple",
            "name": "Apple",
            "description": "Maker of OSX.",
            "invoices": [1, 2],
        }})
    );
    Ok(())
}

#[tokio::test]
async fn test_get_missing_company_is_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/companies/Meta", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["status"], 404);
    Ok(())
}

#[tokio::test]
async fn test_create_company() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "POST", "/companies", Some(json!({"name": "Amazon", "description": "AWS Systems"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"company": {"code": "amazon", "name": "Amazon", "description": "AWS Systems"}}));

    let (_, list) = send(&app, "GET", "/companies", None).await?;
    assert_eq!(list["companies"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn test_create_conflict_is_500_and_keeps_existing() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) = send(&app, "POST", "/companies", Some(json!({"name": "TikTok", "description": "Short videos"}))).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/companies", Some(json!({"name": "TikTok", "description": "Dance"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Conflict");

    let (_, existing) = send(&app, "GET", "/companies/tiktok", None).await?;
    assert_eq!(existing["company"]["description"], "Short videos");
    Ok(())
}

#[tokio::test]
async fn test_create_missing_data_is_500() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "POST", "/companies", Some(json!({"name": "Amazon"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn test_create_without_json_body_is_500() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "POST", "/companies", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["status"], 500);
    assert_eq!(body["error"]["message"], "Validation Error");

    let (status, body) = send(&app, "POST", "/companies", Some(json!({"name": 5, "description": "x"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Validation Error");

    let (_, list) = send(&app, "GET", "/companies", None).await?;
    assert_eq!(list["companies"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_get_company_without_description_is_null() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/companies/ibm", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"company": {"code": "ibm", "name": "IBM", "description": null, "invoices": []}})
    );
    Ok(())
}

#[tokio::test]
async fn test_update_company() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "PUT", "/companies/apple", Some(json!({"name": "AppleEdit", "description": "NewDescrip"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"company": {"code": "apple", "name": "AppleEdit", "description": "NewDescrip"}}));

    let (_, detail) = send(&app, "GET", "/companies/apple", None).await?;
    assert_eq!(detail["company"]["invoices"], json!([1, 2]));
    Ok(())
}

#[tokio::test]
async fn test_update_missing_company_is_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) = send(&app, "PUT", "/companies/Meta", Some(json!({"name": "Meta"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/companies/Meta", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_update_missing_data_is_500_without_write() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) = send(&app, "PUT", "/companies/apple", Some(json!({}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, detail) = send(&app, "GET", "/companies/apple", None).await?;
    assert_eq!(detail["company"]["name"], "Apple");
    assert_eq!(detail["company"]["description"], "Maker of OSX.");
    Ok(())
}

#[tokio::test]
async fn test_update_without_json_body() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "PUT", "/companies/Meta", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Not Found");

    let (status, body) = send(&app, "PUT", "/companies/apple", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Validation Error");

    let (_, detail) = send(&app, "GET", "/companies/apple", None).await?;
    assert_eq!(detail["company"]["name"], "Apple");
    Ok(())
}

#[tokio::test]
async fn test_delete_company() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "DELETE", "/companies/apple", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "deleted"}));

    let (status, _) = send(&app, "GET", "/companies/apple", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_company_is_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) = send(&app, "DELETE", "/companies/Meta", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/companies", None).await?;
    assert_eq!(list["companies"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_health_metrics_docs_and_fallback() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/companies/{code}"].is_object());

    let (status, body) = send(&app, "GET", "/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Not Found");
    Ok(())
}
