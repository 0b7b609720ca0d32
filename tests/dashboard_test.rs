mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_authed(app: axum::Router, token: &str, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
#[serial]
async fn test_dashboard_stats_shape() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let app = common::test_app(pool.clone());
    let token = common::admin_token();

    // One pending registration feeds the counters
    let created = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/registrations")
                .method("POST")
                .header("content-type", "application/json")
                .body(
                    Body::from(
                        json!({
                            "firstName": "Ana",
                            "lastName": "Cruz",
                            "gender": "Female",
                            "dateOfBirth": "1990-01-01",
                            "placeOfBirth": "Manila",
                            "address": "123 Rizal St",
                            "region": "NCR",
                            "province": "Metro Manila",
                            "city": "Manila",
                            "barangay": "Ermita",
                            "chapter": "Manila",
                            "membership": "Member",
                            "contactNumber": "09171234567",
                            "emailAddress": "ana@example.com"
                        })
                        .to_string(),
                    ),
                )
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = get_authed(app, &token, "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];

    // Pending rows count but do not earn revenue
    assert_eq!(data["totalRegistrations"], 1);
    assert_eq!(data["pendingCount"], 1);
    assert_eq!(data["totalRevenue"], 0);
    assert_eq!(data["registrationTrend"].as_array().unwrap().len(), 7);
    assert_eq!(data["recentActivity"].as_array().unwrap().len(), 1);

    // Revenue breakdown is always zero-filled for both tiers
    let revenue = data["revenueByMembership"].as_array().unwrap();
    assert_eq!(revenue.len(), 2);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_dashboard_requires_auth() {
    let pool = setup_test_db_or_skip!();
    let app = common::test_app(pool.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_address_cascade_lookups() {
    let pool = setup_test_db_or_skip!();
    let app = common::test_app(pool.clone());

    let regions = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/address/regions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(regions.status(), StatusCode::OK);

    let body = body_json(regions).await;
    let options = body["data"].as_array().unwrap();
    assert!(!options.is_empty());
    let region_code = options[0]["code"].as_str().unwrap().to_string();

    let provinces = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/address/provinces/{}", region_code))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(provinces.status(), StatusCode::OK);
}
