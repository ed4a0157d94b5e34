use std::path::PathBuf;

use clap::Parser;

/// Voicegate speech gateway
#[derive(Debug, Parser)]
#[command(name = "voicegate", about = "HTTP gateway translating text into synthesized speech")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "voicegate.toml", env = "VOICEGATE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VOICEGATE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
