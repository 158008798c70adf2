use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;

use common::{send, test_app};

#[tokio::test]
async fn declare_list_and_delete_custom_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/custom-fields",
        Some(json!({
            "entityType": "investment",
            "fieldName": "folio",
            "fieldType": "number",
            "required": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let config_id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["fieldName"], "folio");
    assert_eq!(created["fieldType"], "number");

    let (status, listed) = send(&app, Method::GET, "/api/v1/custom-fields/investment", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Scoped to the entity type
    let (status, listed) = send(&app, Method::GET, "/api/v1/custom-fields/investor", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().is_empty());

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/custom-fields/{}", config_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/custom-fields/{}", config_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_entity_type_returns_400() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (status, _) = send(&app, Method::GET, "/api/v1/custom-fields/portfolio", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn values_are_validated_against_declarations() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/custom-fields",
        Some(json!({
            "entityType": "investor",
            "fieldName": "nominee",
            "fieldType": "text",
            "required": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Declared field with the right type is accepted
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/investors",
        Some(json!({
            "name": "Asha",
            "customFields": { "nominee": "Ravi" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["customFields"]["nominee"], "Ravi");

    // Undeclared field is rejected
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/investors",
        Some(json!({
            "name": "Ravi",
            "customFields": { "branch": "HQ" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Wrong type for a declared number field is rejected
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/custom-fields",
        Some(json!({
            "entityType": "investor",
            "fieldName": "folio",
            "fieldType": "number"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/investors",
        Some(json!({
            "name": "Meera",
            "customFields": { "nominee": "Asha", "folio": "twelve" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
