//! HTTP API Integration Tests
//!
//! Drive the router end to end: ownership rules between students and admins,
//! and price edits re-deriving the stored ratio.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use journal_engine::domain::analytics::AnalyticsSettings;
use journal_engine::infrastructure::http::USER_ID_HEADER;
use journal_engine::{
    Container, InMemoryTradeRepository, InMemoryUserDirectory, UserId, UserProfile, UserRole,
    create_router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tower::ServiceExt;

fn profile(id: &str, role: UserRole) -> UserProfile {
    UserProfile {
        id: UserId::new(id),
        username: id.to_string(),
        email: format!("{id}@journal.test"),
        role,
    }
}

fn make_app() -> Router {
    let directory = InMemoryUserDirectory::new(vec![
        profile("coach", UserRole::Admin),
        profile("alice", UserRole::Student),
        profile("bob", UserRole::Student),
    ]);
    let container = Container::new(
        Arc::new(InMemoryTradeRepository::new()),
        Arc::new(directory),
        AnalyticsSettings::default(),
    );
    create_router(container.app_state("it"))
}

async fn call(app: &Router, method: &str, uri: &str, user: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(USER_ID_HEADER, user);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn decimal(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

async fn record_for(app: &Router, user: &str) -> String {
    let (status, body) = call(
        app,
        "POST",
        "/api/v1/trades",
        user,
        Some(json!({
            "trade_date": "2024-03-01",
            "market": "futures",
            "symbol": "NQ",
            "type": "buy",
            "entry_price": "100",
            "stop_loss": "90",
            "take_profit": "120",
            "outcome": "pending"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

// ============================================
// Ownership
// ============================================

#[tokio::test]
async fn student_cannot_read_or_edit_another_students_trade() {
    let app = make_app();
    let id = record_for(&app, "alice").await;
    let uri = format!("/api/v1/trades/{id}");

    let (status, body) = call(&app, "GET", &uri, "bob", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, _) = call(&app, "PUT", &uri, "bob", Some(json!({"outcome": "win"}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = call(&app, "GET", &uri, "alice", None).await;
    assert_eq!(body["outcome"], "pending");

    let (status, listed) = call(&app, "GET", "/api/v1/trades", "bob", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn admin_can_read_and_edit_any_trade() {
    let app = make_app();
    let id = record_for(&app, "alice").await;
    let uri = format!("/api/v1/trades/{id}");

    let (status, body) = call(&app, "GET", &uri, "coach", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "alice");

    let (status, body) = call(&app, "PUT", &uri, "coach", Some(json!({"outcome": "win"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "win");
    assert_eq!(body["user_id"], "alice");
}

#[tokio::test]
async fn unknown_trade_is_not_found() {
    let app = make_app();
    let (status, body) = call(&app, "GET", "/api/v1/trades/missing", "alice", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TRADE_NOT_FOUND");
}

// ============================================
// Price edits
// ============================================

#[tokio::test]
async fn price_edit_recomputes_ratio() {
    let app = make_app();
    let id = record_for(&app, "alice").await;
    let uri = format!("/api/v1/trades/{id}");

    let (status, body) = call(&app, "PUT", &uri, "alice", Some(json!({"take_profit": "130"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["risk_reward"]), dec!(3));
    assert_eq!(body["rating"], "excellent");

    let (status, body) = call(
        &app,
        "PUT",
        &uri,
        "alice",
        Some(json!({"type": "sell", "stop_loss": "110", "take_profit": "95"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["risk_reward"]), dec!(0.5));
    assert_eq!(body["rating"], "poor");
}

#[tokio::test]
async fn invalid_price_edit_leaves_trade_unchanged() {
    let app = make_app();
    let id = record_for(&app, "alice").await;
    let uri = format!("/api/v1/trades/{id}");

    let (status, body) = call(&app, "PUT", &uri, "alice", Some(json!({"stop_loss": "100"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "ZERO_RISK");

    let (_, body) = call(&app, "GET", &uri, "alice", None).await;
    assert_eq!(decimal(&body["stop_loss"]), dec!(90));
    assert_eq!(decimal(&body["risk_reward"]), dec!(2));
}

// ============================================
// Reports
// ============================================

#[tokio::test]
async fn admin_overview_and_user_report() {
    let app = make_app();
    let id = record_for(&app, "alice").await;
    call(
        &app,
        "PUT",
        &format!("/api/v1/trades/{id}"),
        "alice",
        Some(json!({"outcome": "win"})),
    )
    .await;

    let (status, users) = call(&app, "GET", "/api/v1/admin/users", "coach", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["user_id"], "alice");
    assert_eq!(users[0]["total_trades"], 1);
    assert_eq!(decimal(&users[0]["win_rate"]), dec!(100));
    assert_eq!(users[1]["total_trades"], 0);

    let (status, view) = call(&app, "GET", "/api/v1/admin/users/alice/stats", "coach", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["user"]["username"], "alice");
    assert_eq!(view["report"]["stats"]["profit_factor"], "Infinity");

    let (status, _) = call(&app, "GET", "/api/v1/admin/users/alice/stats", "bob", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// ============================================
// User management
// ============================================

#[tokio::test]
async fn admin_manages_users() {
    let app = make_app();
    let new_user = json!({"id": "carol", "username": "carol", "email": "carol@journal.test"});

    let (status, _) = call(&app, "POST", "/api/v1/admin/users", "alice", Some(new_user.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, created) = call(&app, "POST", "/api/v1/admin/users", "coach", Some(new_user.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "carol");
    assert_eq!(created["role"], "student");

    let (status, body) = call(&app, "POST", "/api/v1/admin/users", "coach", Some(new_user)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "USER_EXISTS");

    let (status, body) = call(&app, "POST", "/api/v1/admin/users", "coach", Some(json!({"username": " "}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "username");

    record_for(&app, "carol").await;
    let (_, users) = call(&app, "GET", "/api/v1/admin/users", "coach", None).await;
    let carol = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["user_id"] == "carol")
        .unwrap();
    assert_eq!(carol["total_trades"], 1);

    let (status, _) = call(&app, "DELETE", "/api/v1/admin/users/carol", "alice", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call(&app, "DELETE", "/api/v1/admin/users/carol", "coach", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = call(&app, "GET", "/api/v1/trades", "carol", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = call(&app, "DELETE", "/api/v1/admin/users/carol", "coach", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");

    let (status, _) = call(&app, "DELETE", "/api/v1/admin/users/coach", "coach", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
