//! Programmatic configuration builder for integration tests

use secrecy::SecretString;
use voicegate_config::{Config, HealthConfig, ServerConfig, SpeechConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    default_voice: String,
    max_chunk_chars: usize,
    health_enabled: bool,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            base_url: None,
            default_voice: "voice-default".to_string(),
            max_chunk_chars: 3500,
            health_enabled: true,
        }
    }

    /// Point the speech provider at a mock backend
    pub fn with_provider(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Drop the configured API key
    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    /// Lower the chunking threshold
    pub fn with_max_chunk_chars(mut self, max_chunk_chars: usize) -> Self {
        self.max_chunk_chars = max_chunk_chars;
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.health_enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        Config {
            server: ServerConfig {
                listen_address: None,
                health: HealthConfig {
                    enabled: self.health_enabled,
                    path: "/api/health".to_string(),
                },
                cors: None,
            },
            speech: SpeechConfig {
                api_key: self.api_key.map(SecretString::from),
                base_url: self.base_url,
                default_voice: self.default_voice,
                model_id: "eleven_multilingual_v2".to_string(),
                max_chunk_chars: self.max_chunk_chars,
            },
        }
    }
}
