//! In-process stand-in for a Sitefinity site.
//!
//! Each path has a queue of scripted responses. Responses are served in
//! order and the last one repeats once the queue is drained. Unknown paths
//! answer 404. Every request is recorded.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::Response,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::config::Settings;
use crate::http::{RetryPolicy, SitefinityClient};

#[derive(Debug, Clone)]
pub(crate) struct Scripted {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Scripted {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: Some("application/json; charset=utf-8"),
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("text/html"),
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Default)]
struct FakeState {
    routes: HashMap<String, VecDeque<Scripted>>,
    requests: Vec<Recorded>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeCms {
    state: Arc<Mutex<FakeState>>,
}

impl FakeCms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `response` for `path`.
    pub fn route(self, path: &str, response: Scripted) -> Self {
        self.state
            .lock()
            .unwrap()
            .routes
            .entry(path.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Serve on an ephemeral port and return the base URL.
    pub async fn spawn(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.path == path)
            .count()
    }
}

async fn handle(
    State(cms): State<FakeCms>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let scripted = {
        let mut state = cms.state.lock().unwrap();
        state.requests.push(Recorded {
            method,
            path: path.clone(),
            query: uri.query().map(str::to_string),
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
        state.routes.get_mut(&path).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        })
    };

    let Some(scripted) = scripted else {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("not found"))
            .unwrap();
    };

    if let Some(delay) = scripted.delay {
        tokio::time::sleep(delay).await;
    }

    let mut builder = Response::builder().status(scripted.status);
    if let Some(content_type) = scripted.content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(scripted.body)).unwrap()
}

/// Retry policy with millisecond backoff so tests finish quickly.
pub(crate) fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(
        max_attempts,
        Duration::from_millis(10),
        Duration::from_millis(40),
    )
}

/// Client pointed at `base_url` with no auth and fast retries.
pub(crate) fn test_client(base_url: &str) -> SitefinityClient {
    let settings = Settings::new(base_url).unwrap().with_retry(fast_retry(3));
    SitefinityClient::from_settings(&settings).unwrap()
}

/// Records the level and target of every event emitted while installed.
#[derive(Debug, Clone, Default)]
pub(crate) struct LogCapture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl LogCapture {
    /// Capture events on the current thread until the guard drops.
    /// Pair with a current-thread runtime so async work stays on this thread.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        (capture, tracing::subscriber::set_default(subscriber))
    }

    /// Events at `level` whose target starts with `target`.
    pub fn count(&self, level: Level, target: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, t)| *l == level && t.starts_with(target))
            .count()
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        self.events
            .lock()
            .unwrap()
            .push((*meta.level(), meta.target().to_string()));
    }
}
