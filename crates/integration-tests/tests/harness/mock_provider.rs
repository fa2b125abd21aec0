//! Mock text-to-audio provider for integration tests
//!
//! Emulates the Stability AI stable-audio endpoint: accepts the multipart
//! form, records its fields, and returns canned audio bytes (or a canned
//! error).

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock provider backend that returns predictable responses
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockProviderState>,
}

struct MockProviderState {
    request_count: AtomicU32,
    /// Text fields of each multipart form received, in arrival order
    forms: Mutex<Vec<HashMap<String, String>>>,
    /// Audio bytes returned on success
    audio: Vec<u8>,
    /// When set, every request fails with this status and body
    failure: Option<(u16, String)>,
}

impl MockProvider {
    /// Start a mock that returns the given audio bytes
    pub async fn start(audio: &[u8]) -> anyhow::Result<Self> {
        Self::start_inner(audio.to_vec(), None).await
    }

    /// Start a mock that fails every request with the given status and body
    pub async fn start_failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(Vec::new(), Some((status, body.to_owned()))).await
    }

    async fn start_inner(audio: Vec<u8>, failure: Option<(u16, String)>) -> anyhow::Result<Self> {
        let state = Arc::new(MockProviderState {
            request_count: AtomicU32::new(0),
            forms: Mutex::new(Vec::new()),
            audio,
            failure,
        });

        let app = Router::new()
            .route(
                "/v2beta/audio/stable-audio-2/text-to-audio",
                routing::post(handle_text_to_audio),
            )
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Text fields of the most recent multipart form
    pub fn last_form(&self) -> Option<HashMap<String, String>> {
        self.state.forms.lock().unwrap().last().cloned()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_text_to_audio(
    State(state): State<Arc<MockProviderState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let mut fields = HashMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if let Ok(value) = field.text().await {
            fields.insert(name, value);
        }
    }
    state.forms.lock().unwrap().push(fields);

    if let Some((status, body)) = &state.failure {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, body.clone()).into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], state.audio.clone()).into_response()
}
