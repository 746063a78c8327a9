//! End-to-end client tests against a mock HTTP server: session handling,
//! cache behavior over real requests, and error decoding.

#![deny(clippy::all, clippy::pedantic)]

use httpmock::MockServer;
use httpmock::prelude::*;
use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;

use mensa::MensaClient;
use mensa::application::ClientError;
use mensa::config::{ApiSettings, CacheSettings, LogFormat, LoggingSettings, Settings};
use mensa_api_types::{BalanceAdjustRequest, User};

fn settings(server: &MockServer) -> Settings {
    Settings {
        api: ApiSettings {
            base_url: format!("{}/api/", server.base_url()),
            timeout_secs: 5,
        },
        cache: CacheSettings {
            enabled: true,
            query_limit: 64,
        },
        logging: LoggingSettings {
            level: tracing::level_filters::LevelFilter::OFF,
            format: LogFormat::Compact,
        },
    }
}

fn user_body(id: Uuid, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "full_name": "Test User",
        "is_active": true,
        "is_verified": true,
        "is_admin": false,
        "navigate_to_active_order": false,
        "created_at": "2026-08-01T08:00:00Z",
        "updated_at": "2026-08-01T08:00:00Z",
    })
}

fn balance_body(group: Uuid, user: Uuid, amount: &str) -> serde_json::Value {
    json!({
        "id": Uuid::from_u128(99),
        "user_id": user,
        "group_id": group,
        "amount": amount,
        "created_at": "2026-08-01T08:00:00Z",
        "updated_at": "2026-08-01T08:00:00Z",
        "user_full_name": "Test User",
    })
}

fn local_user(id: Uuid) -> User {
    User {
        id,
        email: "cached@example.com".to_string(),
        full_name: "Cached User".to_string(),
        is_active: true,
        is_verified: true,
        is_admin: false,
        navigate_to_active_order: false,
        created_at: OffsetDateTime::now_utc(),
        updated_at: OffsetDateTime::now_utc(),
    }
}

#[tokio::test]
async fn login_populates_local_session() {
    let server = MockServer::start_async().await;
    let user_id = Uuid::from_u128(1);
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(user_body(user_id, "ada@example.com"));
        })
        .await;

    let client = MensaClient::new(&settings(&server)).expect("client");
    assert!(!client.session().is_authenticated());

    let user = client
        .auth()
        .login("ada@example.com", "hunter2")
        .await
        .expect("login");

    assert_eq!(user.id, user_id);
    assert!(client.session().is_authenticated());
    assert_eq!(
        client.session().current_user().map(|u| u.email),
        Some("ada@example.com".to_string())
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn repeated_reads_are_served_from_cache() {
    let server = MockServer::start_async().await;
    let group = Uuid::from_u128(10);
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/api/groups/{group}/balances"));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([balance_body(group, Uuid::from_u128(1), "12.50")]));
        })
        .await;

    let client = MensaClient::new(&settings(&server)).expect("client");
    let first = client.balances().list(group).await.expect("first read");
    let second = client.balances().list(group).await.expect("second read");

    assert_eq!(first, second);
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn mutation_invalidates_and_the_next_read_refetches() {
    let server = MockServer::start_async().await;
    let group = Uuid::from_u128(10);
    let user = Uuid::from_u128(1);

    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/api/groups/{group}/balances"));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([balance_body(group, user, "12.50")]));
        })
        .await;
    let adjust_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/api/groups/{group}/balances/adjust"));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(balance_body(group, user, "20.00"));
        })
        .await;

    let client = MensaClient::new(&settings(&server)).expect("client");
    client.balances().list(group).await.expect("warm read");

    let request = BalanceAdjustRequest {
        user_id: user,
        amount: "7.50".parse().expect("decimal"),
        note: Some("cash top-up".to_string()),
    };
    client.balances().adjust(group, &request).await.expect("adjust");

    client.balances().list(group).await.expect("refetch");
    assert_eq!(adjust_mock.hits_async().await, 1);
    assert_eq!(list_mock.hits_async().await, 2);
}

#[tokio::test]
async fn concurrent_reads_coalesce_into_one_request() {
    let server = MockServer::start_async().await;
    let group = Uuid::from_u128(10);
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/api/groups/{group}/balances"));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]))
                .delay(std::time::Duration::from_millis(100));
        })
        .await;

    let client = MensaClient::new(&settings(&server)).expect("client");
    let (a, b) = tokio::join!(
        client.balances().list(group),
        client.balances().list(group)
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn expired_session_is_cleared_on_401() {
    let server = MockServer::start_async().await;
    let group = Uuid::from_u128(10);
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/api/groups/{group}/balances"));
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "Not authenticated", "status_code": 401 }));
        })
        .await;

    let client = MensaClient::new(&settings(&server)).expect("client");
    client.session().set_user(local_user(Uuid::from_u128(1)));
    assert!(client.session().is_authenticated());

    let err = client.balances().list(group).await.expect_err("401");
    assert_eq!(err.status(), Some(401));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn auth_path_401_keeps_the_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "Not authenticated", "status_code": 401 }));
        })
        .await;

    let client = MensaClient::new(&settings(&server)).expect("client");
    client.session().set_user(local_user(Uuid::from_u128(1)));

    let err = client.auth().me().await.expect_err("401");
    assert_eq!(err.status(), Some(401));
    // A 401 from the auth surface itself is an ordinary rejection, not an
    // expired-session signal.
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn error_detail_is_decoded() {
    let server = MockServer::start_async().await;
    let group = Uuid::from_u128(10);
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/api/groups/{group}/balances"));
            then.status(422)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "group has no members", "status_code": 422 }));
        })
        .await;

    let client = MensaClient::new(&settings(&server)).expect("client");
    let err = client.balances().list(group).await.expect_err("422");

    assert_eq!(err.status(), Some(422));
    match err {
        ClientError::Api(api) => assert!(api.to_string().contains("group has no members")),
        other => panic!("unexpected error: {other}"),
    }
}
