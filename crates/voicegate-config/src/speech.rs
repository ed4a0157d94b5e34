use secrecy::SecretString;
use serde::Deserialize;

/// Speech provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// Provider API key; absence is logged as a warning at startup, not
    /// treated as fatal
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for the provider API
    #[serde(default)]
    pub base_url: Option<String>,
    /// Voice used when a request omits `voice` or passes "default"
    #[serde(default = "default_voice")]
    pub default_voice: String,
    /// Provider model identifier
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Maximum characters per synthesis chunk
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            default_voice: default_voice(),
            model_id: default_model_id(),
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

fn default_voice() -> String {
    "21m00Tcm4TlvDq8ikWAM".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

const fn default_max_chunk_chars() -> usize {
    3500
}
