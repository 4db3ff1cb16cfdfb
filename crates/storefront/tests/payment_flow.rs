//! Integration tests for the payment initiation flow.
//!
//! Each test spins up a local stub payment backend and drives the checkout
//! flow against it over real HTTP.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::post};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use url::Url;

use duka_storefront::cart::Cart;
use duka_storefront::checkout::{self, CheckoutOutcome};
use duka_storefront::config::BackendConfig;
use duka_storefront::mpesa::MpesaClient;

const SUCCESS_MESSAGE: &str = "STK Push sent! Check your phone to complete payment.";
const TIMEOUT_MESSAGE: &str = "Request timed out. Please check your connection and try again.";

/// Spawn a stub backend and return its address.
async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub backend error");
    });

    addr
}

fn backend_config(addr: SocketAddr) -> BackendConfig {
    BackendConfig {
        base_url: Url::parse(&format!("http://{addr}")).unwrap(),
        payment_timeout: Duration::from_secs(5),
    }
}

fn sample_cart() -> Cart {
    let mut cart = Cart::new();
    cart.add_item("Sample Product 1".to_string(), Decimal::from(100), 1, None);
    cart.add_item("Sample Product 2".to_string(), Decimal::from(200), 2, None);
    cart
}

#[tokio::test]
async fn test_accepted_payment_clears_cart_and_sends_normalized_request() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let captured_by_handler = Arc::clone(&captured);

    let router = Router::new().route(
        "/api/mpesa/stk-push",
        post(move |Json(body): Json<Value>| {
            let captured = Arc::clone(&captured_by_handler);
            async move {
                *captured.lock().unwrap() = Some(body);
                (StatusCode::OK, Json(json!({ "ResponseCode": "0" })))
            }
        }),
    );
    let addr = spawn_backend(router).await;
    let client = MpesaClient::new(&backend_config(addr));

    let mut cart = sample_cart();
    let outcome = checkout::pay_cart(&client, &mut cart, "0712345678").await;

    assert!(outcome.is_accepted());
    assert_eq!(outcome.message(), Some(SUCCESS_MESSAGE));
    assert!(cart.is_empty());

    // The backend must see the normalized phone and a two-decimal amount
    let body = captured.lock().unwrap().take().unwrap();
    assert_eq!(
        body,
        json!({ "phoneNumber": "254712345678", "amount": "500.00" })
    );
}

#[tokio::test]
async fn test_backend_rejection_message_is_surfaced_verbatim() {
    let router = Router::new().route(
        "/api/mpesa/stk-push",
        post(|| async {
            (
                StatusCode::PAYMENT_REQUIRED,
                Json(json!({ "message": "insufficient funds" })),
            )
        }),
    );
    let addr = spawn_backend(router).await;
    let client = MpesaClient::new(&backend_config(addr));

    let mut cart = sample_cart();
    let outcome = checkout::pay_cart(&client, &mut cart, "0712345678").await;

    assert_eq!(outcome.message(), Some("insufficient funds"));
    assert!(!outcome.is_accepted());
    // Failed payments leave the cart intact so the user can retry
    assert_eq!(cart.total(), Decimal::from(500));
}

#[tokio::test]
async fn test_rejection_without_body_falls_back_to_generic_message() {
    let router = Router::new().route(
        "/api/mpesa/stk-push",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let addr = spawn_backend(router).await;
    let client = MpesaClient::new(&backend_config(addr));

    let outcome = checkout::submit_payment(&client, "0712345678", "100").await;

    assert_eq!(outcome.message(), Some("Payment failed. Please try again."));
}

#[tokio::test]
async fn test_deadline_exceeded_surfaces_timeout_and_never_success() {
    let router = Router::new().route(
        "/api/mpesa/stk-push",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::OK
        }),
    );
    let addr = spawn_backend(router).await;

    let config = BackendConfig {
        base_url: Url::parse(&format!("http://{addr}")).unwrap(),
        payment_timeout: Duration::from_millis(200),
    };
    let client = MpesaClient::new(&config);

    let mut cart = sample_cart();
    let outcome = checkout::pay_cart(&client, &mut cart, "0712345678").await;

    assert!(matches!(outcome, CheckoutOutcome::TimedOut { .. }));
    assert_eq!(outcome.message(), Some(TIMEOUT_MESSAGE));
    assert!(!outcome.is_accepted());
    assert!(!cart.is_empty());
}

#[tokio::test]
async fn test_connection_failure_surfaces_network_message() {
    // Bind then immediately drop a listener to get an address nothing serves
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = MpesaClient::new(&backend_config(addr));

    let outcome = checkout::submit_payment(&client, "0712345678", "100").await;

    assert_eq!(
        outcome.message(),
        Some("Network error. Please check your internet connection and try again.")
    );
}

#[tokio::test]
async fn test_invalid_inputs_never_touch_the_network() {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_by_handler = Arc::clone(&hits);

    let router = Router::new().route(
        "/api/mpesa/stk-push",
        post(move || {
            let hits = Arc::clone(&hits_by_handler);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                StatusCode::OK
            }
        }),
    );
    let addr = spawn_backend(router).await;
    let client = MpesaClient::new(&backend_config(addr));

    let outcome = checkout::submit_payment(&client, "123", "abc").await;
    assert!(matches!(outcome, CheckoutOutcome::Invalid(_)));

    let mut empty_cart = Cart::new();
    let outcome = checkout::pay_cart(&client, &mut empty_cart, "0712345678").await;
    let CheckoutOutcome::Invalid(errors) = outcome else {
        panic!("expected validation failure for empty cart");
    };
    assert_eq!(
        errors.amount.as_deref(),
        Some("Cart is empty. Add products before payment.")
    );

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
