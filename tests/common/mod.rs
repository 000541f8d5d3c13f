//! In-process mock of the WaSender API used by the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::post;
use axum::Router;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    reply: &'static str,
}

/// Holds the runtime serving the mock; dropping it stops the server.
pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    _runtime: tokio::runtime::Runtime,
}

impl MockServer {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn capture(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };
    let captured = CapturedRequest {
        path: uri.path().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    };
    state.requests.lock().unwrap().push(captured);
    (state.status, state.reply)
}

/// Start a mock answering every send endpoint with `status` and `reply`.
pub fn spawn_mock(status: StatusCode, reply: &'static str) -> MockServer {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to build runtime");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        requests: requests.clone(),
        status,
        reply,
    };
    let app = Router::new()
        .route("/senddoc", post(capture))
        .route("/sendimg", post(capture))
        .route("/sendtext", post(capture))
        .with_state(state);

    let listener = runtime
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .expect("failed to bind mock server");
    let addr = listener.local_addr().expect("no local addr");
    runtime.spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockServer {
        base_url: format!("http://{addr}"),
        requests,
        _runtime: runtime,
    }
}

/// A fresh directory under /tmp, unique per process and call.
pub fn temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/wasender-test-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

/// An address nothing listens on.
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
