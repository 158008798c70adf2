use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;

use common::{send, test_app};

#[tokio::test]
async fn root_returns_liveness_message() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Investment Tracking API");
}

#[tokio::test]
async fn investor_crud_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    // Create
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/investors",
        Some(json!({
            "name": "Asha",
            "relationship": "mother",
            "email": "asha@example.com",
            "dateOfBirth": "1960-04-02"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Asha");
    assert_eq!(created["relationship"], "mother");

    // Fetch yields field-for-field equality with the create response
    let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/investors/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // List contains it
    let (status, listed) = send(&app, Method::GET, "/api/v1/investors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Partial update touches only supplied fields
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/investors/{}", id),
        Some(json!({ "occupation": "Teacher" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Asha");
    assert_eq!(updated["occupation"], "Teacher");
    assert_eq!(updated["email"], "asha@example.com");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // Delete
    let (status, deleted) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/investors/{}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);

    // Gone afterwards
    let (status, _) = send(&app, Method::GET, &format!("/api/v1/investors/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_investor_returns_404() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (status, _) = send(&app, Method::GET, "/api/v1/investors/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/v1/investors/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_update_returns_400() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/v1/investors",
        Some(json!({ "name": "Ravi" })),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/investors/{}", id),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    // Record unmodified
    let (_, fetched) = send(&app, Method::GET, &format!("/api/v1/investors/{}", id), None).await;
    assert_eq!(fetched["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn blank_name_returns_400() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/investors",
        Some(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// End-to-end walkthrough of the guarded-delete scenario: stats reflect the
/// records, the delete is blocked while the investment exists, and succeeds
/// once it is gone.
#[tokio::test]
async fn guarded_delete_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (_, investor) = send(
        &app,
        Method::POST,
        "/api/v1/investors",
        Some(json!({ "name": "Asha" })),
    )
    .await;
    let investor_id = investor["id"].as_str().unwrap().to_string();

    let (status, investment) = send(
        &app,
        Method::POST,
        "/api/v1/investments",
        Some(json!({
            "investorId": investor_id,
            "name": "Bank FD",
            "investmentType": "FD",
            "amount": 1000.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let investment_id = investment["id"].as_str().unwrap().to_string();

    let (status, stats) = send(&app, Method::GET, "/api/v1/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalInvestors"], 1);
    assert_eq!(stats["totalInvestments"], 1);
    assert_eq!(stats["totalPortfolioValue"], 1000.0);
    assert_eq!(stats["investmentTypesCount"]["FD"], 1);

    // Delete blocked while the investment references the investor
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/investors/{}", investor_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/investors/{}", investor_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Remove the investment, then the delete goes through
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/investments/{}", investment_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/investors/{}", investor_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}
