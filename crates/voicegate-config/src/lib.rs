#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod speech;

use serde::Deserialize;

pub use cors::CorsConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use speech::SpeechConfig;

/// Top-level Voicegate configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech provider configuration
    #[serde(default)]
    pub speech: SpeechConfig,
}
