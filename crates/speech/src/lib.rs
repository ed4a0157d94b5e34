#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod chunk;
mod emotion;
mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use chunk::{SentenceChunks, sentence_chunks};
pub use emotion::{VoiceSettings, voice_settings_for};
pub use error::{Result, SpeechError};
pub use request::RequestContext;
pub use server::{Server, SpeechServerBuilder};
pub use types::{SpeakRequest, SpeakResponse};
use request::ExtractPayload;

/// Build the speech gateway from configuration
pub fn build_server(config: &voicegate_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        SpeechServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize speech gateway: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for speech synthesis
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/speak", post(speak))
}

/// Handle speech synthesis requests
async fn speak(
    State(server): State<Arc<Server>>,
    ExtractPayload(context, request): ExtractPayload<types::SpeakRequest>,
) -> Result<Json<types::SpeakResponse>> {
    tracing::debug!("speak handler called, text_len={}", request.text.len());

    let response = server.synthesize(request, &context).await?;

    tracing::debug!("speech synthesis complete");

    Ok(Json(response))
}
