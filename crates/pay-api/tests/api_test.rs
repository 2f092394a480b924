use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pay_api::{create_router, AppConfig, AppState};
use pay_core::SequentialTransactionIds;
use pay_mock::mock_checkout;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
    };
    let checkout = mock_checkout(Arc::new(SequentialTransactionIds::new()));
    create_router(AppState::with_checkout(checkout, config))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = send(app(), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn lists_supported_modes() {
    let (status, body) = send(app(), "GET", "/api/v1/modes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["modes"][0]["name"], "PAYPAL");
    assert_eq!(body["modes"][2]["code"], 3);
    assert_eq!(body["modes"][1]["available"], true);
}

#[tokio::test]
async fn checkout_by_alias() {
    let (status, body) = send(
        app(),
        "POST",
        "/api/v1/checkout",
        Some(json!({ "mode": "paypal", "amount": 150.75 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["payment_mode"], "PayPal");
    assert_eq!(body["amount"], 150.75);
    assert_eq!(body["transaction_id"], "PP_000001");
}

#[tokio::test]
async fn checkout_by_code() {
    let (status, body) = send(
        app(),
        "POST",
        "/api/v1/checkout",
        Some(json!({ "mode": 3, "amount": 20.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payment_mode"], "Credit Card");
    assert!(body["transaction_id"].as_str().unwrap().starts_with("CC_"));
}

#[tokio::test]
async fn invalid_amount_is_bad_request_with_record() {
    let (status, body) = send(
        app(),
        "POST",
        "/api/v1/checkout",
        Some(json!({ "mode": "paypal", "amount": -50.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "invalid_amount");
    assert!(body["transaction_id"].is_null());
    assert!(body["message"].as_str().unwrap().contains("Invalid amount"));
}

#[tokio::test]
async fn unrecognized_mode_is_rejected() {
    for mode in [json!("bitcoin"), json!(999), json!(true), Value::Null] {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/checkout",
            Some(json!({ "mode": mode, "amount": 150.75 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["payment_mode"], "UNKNOWN");
        assert_eq!(body["error"], "unsupported_mode");
        assert!(body["transaction_id"].is_null());
    }
}

#[tokio::test]
async fn batch_checkout_summarizes() {
    let (status, body) = send(
        app(),
        "POST",
        "/api/v1/checkout/batch",
        Some(json!({
            "payments": [
                { "mode": "paypal", "amount": 150.75 },
                { "mode": "googleplay", "amount": 75.5 },
                { "mode": 99, "amount": 10.0 },
                { "mode": "cc", "amount": 0.0 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 4);
    assert_eq!(body["results"][1]["payment_mode"], "GooglePay");
    assert_eq!(body["summary"]["total"], 4);
    assert_eq!(body["summary"]["succeeded"], 2);
    assert_eq!(body["summary"]["failed"], 2);
    assert_eq!(body["summary"]["total_amount"], 226.25);
}
