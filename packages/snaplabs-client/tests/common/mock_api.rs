//! In-process mock of the SnapLabs backend.
//!
//! Binds an axum router to an ephemeral local port and records every request
//! it serves (method, path, auth header, body) so tests can assert on the
//! actual wire traffic. The reply is a single canned status/body pair that
//! tests swap per step.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::sync::Mutex;

/// One request exactly as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    body: String,
}

struct MockState {
    requests: Mutex<Vec<RecordedRequest>>,
    response: Mutex<CannedResponse>,
    hits: AtomicUsize,
}

/// Mock SnapLabs API bound to an ephemeral local port.
pub struct MockApi {
    state: Arc<MockState>,
    addr: SocketAddr,
}

impl MockApi {
    /// Start the mock, answering every request with `200 {}` until
    /// [`respond_with`](MockApi::respond_with) changes the reply.
    pub async fn start() -> Self {
        super::init_tracing();

        let state = Arc::new(MockState {
            requests: Mutex::new(Vec::new()),
            response: Mutex::new(CannedResponse {
                status: 200,
                body: "{}".to_string(),
            }),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api listener");
        let addr = listener.local_addr().expect("mock api local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock api");
        });

        Self { state, addr }
    }

    /// Base URL to point a client at.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Replace the canned reply.
    pub async fn respond_with(&self, status: u16, body: impl Into<String>) {
        *self.state.response.lock().await = CannedResponse {
            status,
            body: body.into(),
        };
    }

    /// Total requests served so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// The most recent request served, if any.
    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().await.last().cloned()
    }

    /// Every request served, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let header_string = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().await.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header_string(header::AUTHORIZATION),
        content_type: header_string(header::CONTENT_TYPE),
        body: body.to_vec(),
    });

    let canned = state.response.lock().await.clone();
    let status = StatusCode::from_u16(canned.status).expect("valid mock status");
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}
