use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client so provider requests reuse connections
///
/// Generation runs synchronously against the provider and can take most
/// of a minute for a 30 second clip, hence the generous timeout.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
