use base64::Engine as _;
use secrecy::ExposeSecret;

use crate::{
    chunk::sentence_chunks,
    emotion::voice_settings_for,
    error::SpeechError,
    provider::elevenlabs::ElevenLabsProvider,
    request::RequestContext,
    types::{SpeakRequest, SpeakResponse, SynthesisRequest},
};

/// Sentinel voice value that resolves to the configured default
const DEFAULT_VOICE_SENTINEL: &str = "default";

/// Speech gateway that validates requests and drives the provider
pub struct Server {
    provider: ElevenLabsProvider,
    default_voice: String,
    max_chunk_chars: usize,
}

impl Server {
    /// Synthesize text to speech
    ///
    /// Validates the request, derives voice settings from the emotion label,
    /// splits the text into provider-sized chunks, issues one provider call
    /// per chunk, and returns the concatenated audio base64-encoded. All
    /// chunks synthesize or the request fails; no partial audio is returned.
    pub async fn synthesize(
        &self,
        request: SpeakRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeakResponse> {
        let text = request.text.trim();

        if text.is_empty() {
            return Err(SpeechError::InvalidRequest("text required".to_string()));
        }

        let voice_settings = voice_settings_for(request.emotion.as_deref());
        let voice_id = self.resolve_voice(request.voice.as_deref());

        let mut audio: Vec<u8> = Vec::new();
        let mut mime: Option<String> = None;
        let mut chunk_count = 0usize;

        for chunk in sentence_chunks(text, self.max_chunk_chars) {
            let synthesis = SynthesisRequest {
                text: chunk,
                voice_id,
                voice_settings,
            };

            let synthesized = self.provider.synthesize(&synthesis, context).await?;

            if mime.is_none() {
                mime = Some(synthesized.content_type);
            }
            audio.extend_from_slice(&synthesized.audio);
            chunk_count += 1;
        }

        tracing::debug!(chunks = chunk_count, bytes = audio.len(), "speech synthesis assembled");

        Ok(SpeakResponse {
            audio_base64: base64::engine::general_purpose::STANDARD.encode(&audio),
            mime,
        })
    }

    /// Resolve the requested voice, mapping the "default" sentinel and
    /// absent values to the configured default voice
    fn resolve_voice<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            None | Some("" | DEFAULT_VOICE_SENTINEL) => &self.default_voice,
            Some(voice) => voice,
        }
    }
}

/// Builder for constructing the speech gateway from configuration
pub struct SpeechServerBuilder<'a> {
    config: &'a voicegate_config::Config,
}

impl<'a> SpeechServerBuilder<'a> {
    pub const fn new(config: &'a voicegate_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let speech = &self.config.speech;

        if speech.default_voice.trim().is_empty() {
            return Err(SpeechError::ConfigError(
                "default_voice must not be empty".to_string(),
            ));
        }

        // An absent key is a warning, not a startup failure; synthesis
        // requests without a key fail at request time instead
        let api_key = speech
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().is_empty());

        if api_key.is_none() {
            tracing::warn!("no TTS provider API key configured; synthesis requests will fail until one is supplied");
        }

        let provider = ElevenLabsProvider::new(api_key, speech.base_url.clone(), speech.model_id.clone());

        tracing::debug!(
            default_voice = %speech.default_voice,
            max_chunk_chars = speech.max_chunk_chars,
            "speech gateway initialized"
        );

        Ok(Server {
            provider,
            default_voice: speech.default_voice.clone(),
            max_chunk_chars: speech.max_chunk_chars,
        })
    }
}
