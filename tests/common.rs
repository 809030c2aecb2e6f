#![allow(dead_code)]

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use once_cell::sync::Lazy;
use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static START: Once = Once::new();
static _GUARD: Lazy<std::sync::Mutex<Option<tracing_appender::non_blocking::WorkerGuard>>> =
    Lazy::new(|| std::sync::Mutex::new(None));

/// Initialize test environment: dotenv and tracing (stderr + file).
/// Idempotent: safe to call multiple times.
pub fn init() {
    START.call_once(|| {
        let _ = dotenvy::dotenv();
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .expect("env filter");

        // Daily rotating log file separate from app runtime logs
        let file_appender = rolling::daily("logs", "tests.log");
        let (file_nb, guard) = tracing_appender::non_blocking(file_appender);
        *_GUARD.lock().unwrap() = Some(guard); // retain guard for lifetime

        let stderr_layer = fmt::layer()
            .with_target(true)
            .with_thread_names(true)
            .with_writer(std::io::stderr);

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_thread_names(true)
            .with_writer(file_nb);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init();

        tracing::info!(target: "test_init", "Test tracing initialized (stderr + rotating file)");
    });
}

pub const SUCCESS_BODY: &str = r#"{"Genre":"dungeon crawler","Emotion":"wonder","Fantasy":"a floating city","Link":"/l/0a0b0c"}"#;

/// A stand-in for the game data service with one route per response shape.
pub fn fake_service_router() -> Router {
    Router::new()
        .route("/api/game/", get(|| async { json(SUCCESS_BODY) }))
        .route(
            "/vowel/api/game/",
            get(|| async {
                json(r#"{"Genre":"adventure","Emotion":"grief","Fantasy":"the suburbs","Link":"/l/01ff02"}"#)
            }),
        )
        .route(
            "/one/api/game/",
            get(|| async {
                json(r#"{"Genre":"one-button game","Emotion":"nostalgia","Fantasy":"a lighthouse","Link":"/l/020202"}"#)
            }),
        )
        .route(
            "/odd-link/api/game/",
            get(|| async {
                json(r#"{"Genre":"rhythm game","Emotion":"awe","Fantasy":"Kyōto","Link":"/l/a b?q=%20é&x=%2F"}"#)
            }),
        )
        .route("/error/api/game/", get(|| async { json(r#"{"Error":"No games left"}"#) }))
        .route("/html/api/game/", get(|| async { "<html><body>error getting game data</body></html>" }))
        .route("/empty/api/game/", get(|| async { json("{}") }))
        .route(
            "/down/api/game/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, json(SUCCESS_BODY)).into_response() }),
        )
}

fn json(body: &'static str) -> impl IntoResponse {
    ([(axum::http::header::CONTENT_TYPE, "application/json")], body)
}

/// Bind the fake service on an ephemeral port and return its base URL.
pub async fn spawn_fake_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake service");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, fake_service_router()).await.expect("serve");
    });
    format!("http://{addr}")
}
