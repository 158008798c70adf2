use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;

use common::{send, test_app};

async fn create_investor(app: &axum::Router, name: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/investors",
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn creating_for_missing_investor_returns_404_and_persists_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/investments",
        Some(json!({
            "investorId": "no-such-investor",
            "name": "Ghost FD",
            "investmentType": "FD",
            "amount": 100.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, listed) = send(&app, Method::GET, "/api/v1/investments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn negative_amount_returns_400() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;
    let investor_id = create_investor(&app, "Asha").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/investments",
        Some(json!({
            "investorId": investor_id,
            "name": "Bad FD",
            "investmentType": "FD",
            "amount": -5.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_filters_by_owner() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;

    let asha = create_investor(&app, "Asha").await;
    let ravi = create_investor(&app, "Ravi").await;

    for (owner, kind) in [(&asha, "FD"), (&asha, "stocks"), (&ravi, "gold")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/investments",
            Some(json!({
                "investorId": owner,
                "name": format!("{} holding", kind),
                "investmentType": kind,
                "amount": 100.0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, all) = send(&app, Method::GET, "/api/v1/investments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, ashas) = send(
        &app,
        Method::GET,
        &format!("/api/v1/investments?investorId={}", asha),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ashas = ashas.as_array().unwrap();
    assert_eq!(ashas.len(), 2);
    assert!(ashas
        .iter()
        .all(|i| i["investorId"].as_str() == Some(asha.as_str())));
}

#[tokio::test]
async fn full_replace_update_revalidates_owner() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;
    let investor_id = create_investor(&app, "Asha").await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/v1/investments",
        Some(json!({
            "investorId": investor_id,
            "name": "Bank FD",
            "investmentType": "FD",
            "amount": 1000.0,
            "interestRate": 7.1,
            "interestDay": 10,
            "interestMonth": 4
        })),
    )
    .await;
    let investment_id = created["id"].as_str().unwrap();

    // Update referencing a missing investor is rejected
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/investments/{}", investment_id),
        Some(json!({
            "investorId": "missing",
            "name": "Bank FD",
            "investmentType": "FD",
            "amount": 1100.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Valid full replace
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/investments/{}", investment_id),
        Some(json!({
            "investorId": investor_id,
            "name": "Bank FD renewed",
            "investmentType": "FD",
            "amount": 1100.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["amount"], 1100.0);
    assert_eq!(updated["name"], "Bank FD renewed");
    // Fields absent from the replacement payload are cleared
    assert_eq!(updated["interestRate"], serde_json::Value::Null);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn delete_is_unconditional_but_missing_returns_404() {
    let tmp = tempfile::tempdir().unwrap();
    let app = test_app(&tmp).await;
    let investor_id = create_investor(&app, "Asha").await;

    let (_, created) = send(
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
    let investment_id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/investments/{}", investment_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/investments/{}", investment_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
