use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use card_payments_gateway::bank::simulator::SimulatorBank;
use card_payments_gateway::bank::{AcquiringBank, BankAuthorizationRequest};
use card_payments_gateway::clock::FixedClock;
use card_payments_gateway::domain::payment::{Cvv, PaymentRequest, PaymentStatus};
use card_payments_gateway::error::{BankError, PaymentError};
use card_payments_gateway::repo::payments_repo::PaymentsRepo;
use card_payments_gateway::service::payment_service::PaymentService;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Serves `app` on an ephemeral port and returns its base URL.
async fn start_fake_bank(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://127.0.0.1:{port}")
}

fn bank_request() -> BankAuthorizationRequest {
    BankAuthorizationRequest {
        card_number: "2222405343248877".to_string(),
        expiry_date: "04/2030".to_string(),
        currency: "GBP".to_string(),
        amount: 100,
        cvv: "123".to_string(),
    }
}

#[tokio::test]
async fn authorized_response_is_parsed_and_body_matches_contract() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = seen.clone();
    let app = Router::new().route(
        "/payments",
        post(move |Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                captured.lock().unwrap().push(body);
                Json(json!({
                    "authorized": true,
                    "authorization_code": "0bb07405-6d44-4b50-a14f-7ae0beff13ad"
                }))
            }
        }),
    );
    let base = start_fake_bank(app).await;

    let bank = SimulatorBank::new(base, 2000);
    let out = bank.authorize(&bank_request()).await.unwrap();
    assert!(out.authorized);
    assert_eq!(
        out.authorization_code.as_deref(),
        Some("0bb07405-6d44-4b50-a14f-7ae0beff13ad")
    );

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen[0],
        json!({
            "card_number": "2222405343248877",
            "expiry_date": "04/2030",
            "currency": "GBP",
            "amount": 100,
            "cvv": "123"
        })
    );
}

#[tokio::test]
async fn declined_response_is_not_an_error() {
    let app = Router::new().route(
        "/payments",
        post(|| async { Json(json!({"authorized": false, "authorization_code": ""})) }),
    );
    let bank = SimulatorBank::new(start_fake_bank(app).await, 2000);

    let out = bank.authorize(&bank_request()).await.unwrap();
    assert!(!out.authorized);
}

#[tokio::test]
async fn non_success_status_is_bank_unavailable() {
    let app = Router::new().route(
        "/payments",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let bank = SimulatorBank::new(start_fake_bank(app).await, 2000);

    match bank.authorize(&bank_request()).await {
        Err(BankError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_bank_unavailable() {
    let app = Router::new().route("/payments", post(|| async { "not json" }));
    let bank = SimulatorBank::new(start_fake_bank(app).await, 2000);

    assert!(matches!(
        bank.authorize(&bank_request()).await,
        Err(BankError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn slow_bank_times_out() {
    let app = Router::new().route(
        "/payments",
        post(|| async {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            Json(json!({"authorized": true}))
        }),
    );
    let bank = SimulatorBank::new(start_fake_bank(app).await, 100);

    assert!(matches!(
        bank.authorize(&bank_request()).await,
        Err(BankError::Timeout(100))
    ));
}

#[tokio::test]
async fn unreachable_bank_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let bank = SimulatorBank::new(format!("http://127.0.0.1:{port}"), 2000);
    assert!(matches!(
        bank.authorize(&bank_request()).await,
        Err(BankError::Transport(_))
    ));
}

#[tokio::test]
async fn service_records_decline_from_simulator() {
    let app = Router::new().route(
        "/payments",
        post(|| async { Json(json!({"authorized": false, "authorization_code": null})) }),
    );
    let bank = SimulatorBank::new(start_fake_bank(app).await, 2000);
    let svc = PaymentService::new(
        PaymentsRepo::new(),
        Arc::new(bank),
        Arc::new(FixedClock::ymd(2026, 6, 15).unwrap()),
    );

    let record = svc
        .process(PaymentRequest {
            card_number: Some("2222405343248112".to_string()),
            expiry_date: Some("01/2027".to_string()),
            currency: Some("USD".to_string()),
            amount: Some(60000),
            cvv: Some(Cvv::Number(456)),
        })
        .await
        .unwrap();
    assert_eq!(record.status, PaymentStatus::Declined);
    assert_eq!(record.card_number_last_four, "8112");
}

#[tokio::test]
async fn service_rejects_when_simulator_is_down() {
    let app = Router::new().route(
        "/payments",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let bank = SimulatorBank::new(start_fake_bank(app).await, 2000);
    let svc = PaymentService::new(
        PaymentsRepo::new(),
        Arc::new(bank),
        Arc::new(FixedClock::ymd(2026, 6, 15).unwrap()),
    );

    let e = svc
        .process(PaymentRequest {
            card_number: Some("2222405343248870".to_string()),
            expiry_date: Some("01/2027".to_string()),
            currency: Some("USD".to_string()),
            amount: Some(60000),
            cvv: Some(Cvv::Number(456)),
        })
        .await
        .unwrap_err();
    assert!(matches!(e, PaymentError::BankUnavailable(BankError::Status { status: 503, .. })));
    assert!(svc.payments_repo.is_empty().await);
}
