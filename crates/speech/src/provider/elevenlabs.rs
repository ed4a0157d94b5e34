use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    emotion::VoiceSettings,
    error::SpeechError,
    http_client::http_client,
    request::RequestContext,
    types::{SynthesisRequest, SynthesizedAudio},
};

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// `ElevenLabs` synthesis client
///
/// Issues exactly one outbound call per invocation; no retry, no backoff
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model_id: String,
}

impl ElevenLabsProvider {
    pub fn new(api_key: Option<SecretString>, base_url: Option<String>, model_id: String) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
            model_id,
        }
    }

    /// Resolve the API key, preferring the caller-provided override
    fn resolve_api_key<'a>(&'a self, context: &'a RequestContext) -> crate::error::Result<&'a SecretString> {
        context
            .api_key
            .as_ref()
            .or(self.api_key.as_ref())
            .ok_or_else(|| SpeechError::ConfigError("no API key configured for the TTS provider".to_string()))
    }

    pub async fn synthesize(
        &self,
        request: &SynthesisRequest<'_>,
        context: &RequestContext,
    ) -> crate::error::Result<SynthesizedAudio> {
        let api_key = self.resolve_api_key(context)?;
        let url = format!("{}/text-to-speech/{}", self.base_url, request.voice_id);

        tracing::debug!(
            "ElevenLabs TTS request: voice={}, model={}, text_len={}",
            request.voice_id,
            self.model_id,
            request.text.len(),
        );

        let body = ElevenLabsRequest {
            text: request.text,
            model_id: &self.model_id,
            voice_settings: request.voice_settings,
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key.expose_secret().to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                SpeechError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(SpeechError::ProviderApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            SpeechError::InternalError(None)
        })?;

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        Ok(SynthesizedAudio {
            audio: audio.to_vec(),
            content_type,
        })
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}
