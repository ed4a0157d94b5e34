use serde::{Deserialize, Serialize};

use crate::emotion::VoiceSettings;

/// Inbound speech synthesis request
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    /// Text to synthesize into speech
    ///
    /// Presence and non-emptiness are validated by the gateway so that a
    /// missing field yields the documented error body rather than a
    /// deserialization failure
    #[serde(default)]
    pub text: String,
    /// Voice identifier understood by the provider; absent or the literal
    /// "default" resolves to the configured default voice
    pub voice: Option<String>,
    /// Emotion label (e.g. "joy", "sad", "angry")
    pub emotion: Option<String>,
}

/// Outbound response carrying the synthesized audio
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeakResponse {
    /// Audio bytes re-encoded as standard base64
    pub audio_base64: String,
    /// Content type reported by the provider (e.g. "audio/mpeg")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

/// Fully-built payload for a single provider call
///
/// Covers one chunk of the request text; the voice identifier travels in the
/// provider URL, not the JSON body
#[derive(Debug)]
pub struct SynthesisRequest<'a> {
    /// Chunk of text to synthesize
    pub text: &'a str,
    /// Resolved provider voice identifier
    pub voice_id: &'a str,
    /// Voice tuning derived from the emotion label
    pub voice_settings: VoiceSettings,
}

/// Raw audio returned by the provider for one synthesis call
pub struct SynthesizedAudio {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}
