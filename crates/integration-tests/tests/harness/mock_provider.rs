//! Mock TTS provider for integration tests
//!
//! Implements the ElevenLabs-style synthesis endpoint and returns canned
//! audio bytes, recording every request it receives

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Canned audio returned by the default mock
pub const DEFAULT_AUDIO: &[u8] = b"ID3-mock-mpeg-frame-data";

/// One synthesis request as seen by the provider
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Voice identifier from the URL path
    pub voice_id: String,
    /// Value of the `xi-api-key` header, if present
    pub api_key: Option<String>,
    /// Parsed JSON body
    pub body: serde_json::Value,
}

/// Mock provider backend that returns predictable audio
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockProviderState>,
}

struct MockProviderState {
    synthesis_count: AtomicU32,
    requests: Mutex<Vec<CapturedRequest>>,
    /// Status and body returned instead of audio (None = succeed)
    failure: Option<(u16, String)>,
    audio: Vec<u8>,
}

impl MockProvider {
    /// Start a mock that returns [`DEFAULT_AUDIO`]
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None, DEFAULT_AUDIO.to_vec()).await
    }

    /// Start a mock that returns the given audio bytes
    pub async fn start_with_audio(audio: &[u8]) -> anyhow::Result<Self> {
        Self::start_inner(None, audio.to_vec()).await
    }

    /// Start a mock that rejects every request with the given status and body
    pub async fn start_failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(Some((status, body.to_string())), Vec::new()).await
    }

    async fn start_inner(failure: Option<(u16, String)>, audio: Vec<u8>) -> anyhow::Result<Self> {
        let state = Arc::new(MockProviderState {
            synthesis_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
            failure,
            audio,
        });

        let app = Router::new()
            .route("/text-to-speech/{voice_id}", routing::post(handle_synthesis))
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

    /// Base URL for configuring the mock as a provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of synthesis requests received
    pub fn synthesis_count(&self) -> u32 {
        self.state.synthesis_count.load(Ordering::Relaxed)
    }

    /// All requests received, in order
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<CapturedRequest> {
        self.state.requests.lock().unwrap().last().cloned()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_synthesis(
    State(state): State<Arc<MockProviderState>>,
    Path(voice_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    state.synthesis_count.fetch_add(1, Ordering::Relaxed);

    state.requests.lock().unwrap().push(CapturedRequest {
        voice_id,
        api_key: headers
            .get("xi-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    if let Some((status, message)) = &state.failure {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, message.clone()).into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], state.audio.clone()).into_response()
}
