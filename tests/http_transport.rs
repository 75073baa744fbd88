//! HttpTransport against an in-process API server

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use babytracker::records::{DiaperChange, Feed, GrowthMeasurement, SleepSession};
use babytracker::transport::{self, HttpTransport, RequestError, Transport};
use babytracker::{Shell, Screen, SubmitOutcome, Workflow};

#[derive(Default)]
struct Nursery {
    feeds: Mutex<Vec<Value>>,
}

type Shared = Arc<Nursery>;

async fn list_feeds(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.feeds.lock().unwrap().clone()))
}

async fn create_feed(State(state): State<Shared>, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut feeds = state.feeds.lock().unwrap();
    body["id"] = json!(feeds.len() + 1);
    feeds.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn get_feed(State(state): State<Shared>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    state
        .feeds
        .lock()
        .unwrap()
        .iter()
        .find(|f| f["id"] == json!(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn reject_sleep() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "missing required fields"})),
    )
}

async fn broken_growth() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "database unavailable"})),
    )
}

async fn plain_failure() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "upstream down")
}

/// Serve the mock API on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let state = Shared::default();

    let api = Router::new()
        .route("/feeds", get(list_feeds).post(create_feed))
        .route("/feeds/:id", get(get_feed))
        .route("/sleep", get(list_feeds).post(reject_sleep))
        .route("/growth", get(broken_growth).post(broken_growth))
        .route("/diapers", get(list_feeds).post(plain_failure))
        .with_state(state);

    let app = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/", addr)
}

#[tokio::test]
async fn test_feed_round_trip_over_http() {
    let base = spawn_server().await;
    let http = HttpTransport::new(&base);
    assert!(!http.base_url().ends_with('/'));

    let mut feeds: Workflow<Feed> = Workflow::new();
    feeds.set_field("type", "Bottle").unwrap();
    feeds.set_field("date", "2024-01-15").unwrap();
    feeds.set_field("time", "08:30").unwrap();
    feeds.set_field("quantity", "120").unwrap();
    feeds.set_field("notes", "ate well").unwrap();

    let outcome = feeds.submit(&http).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Logged { generation: 1 });
    assert_eq!(
        feeds.feedback(),
        Some("Feed logged: Bottle on 2024-01-15 at 08:30")
    );
    assert_eq!(feeds.recents().len(), 1);

    let stored = http.fetch_json("/feeds/1").await.unwrap();
    assert_eq!(stored["type"], "Bottle");
    assert_eq!(stored["time"], "2024-01-15T08:30");
    assert_eq!(stored["quantity"], json!(120));

    let one: Feed = transport::get(&http, 1).await.unwrap();
    assert_eq!(one.notes, "ate well");

    let missing = transport::get::<Feed, _>(&http, 42).await.unwrap_err();
    assert_eq!(missing.to_string(), "GET /feeds/42 failed: 404");
}

#[tokio::test]
async fn test_post_error_field_is_surfaced() {
    let http = HttpTransport::new(&spawn_server().await);

    let mut sleep: Workflow<SleepSession> = Workflow::new();
    sleep.set_field("type", "Nap").unwrap();
    let before = sleep.form().clone();

    assert_eq!(sleep.submit(&http).await.unwrap(), SubmitOutcome::Failed);
    assert_eq!(sleep.error(), Some("missing required fields"));
    assert_eq!(sleep.form(), &before);
}

#[tokio::test]
async fn test_post_without_error_field_reports_status() {
    let http = HttpTransport::new(&spawn_server().await);

    let mut diapers: Workflow<DiaperChange> = Workflow::new();
    diapers.quick_fill("wet").unwrap();
    diapers.submit(&http).await.unwrap();

    assert_eq!(diapers.error(), Some("POST /diapers failed: 502"));
}

#[tokio::test]
async fn test_get_failure_ignores_error_body() {
    let http = HttpTransport::new(&spawn_server().await);

    let err = transport::list::<GrowthMeasurement, _>(&http).await.unwrap_err();
    assert_eq!(
        err,
        RequestError::Status {
            status: 500,
            message: "GET /growth failed: 500".to_string(),
        }
    );

    let shell = Shell::new(http);
    let Screen::Growth(growth) = shell.open("/growth").await else {
        panic!("expected the growth view");
    };
    assert!(growth.recents().is_empty());
    assert_eq!(growth.error(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = HttpTransport::new(&format!("http://{}/api", addr));
    let err = http.fetch_json("/feeds").await.unwrap_err();
    assert!(matches!(err, RequestError::Network(_)));
    assert_eq!(err.status(), None);
}
