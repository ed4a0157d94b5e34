use std::{sync::OnceLock, time::Duration};

use axum::http;
use reqwest::Client;

/// Defensive cap on outbound synthesis calls
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(30);

/// Common HTTP client to reuse connections across provider calls
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = http::HeaderMap::new();
            headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

            Client::builder()
                .timeout(OUTBOUND_TIMEOUT)
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
