//! Test server wrapper that starts Songforge on a random port

use std::net::SocketAddr;
use std::sync::Arc;

use musicgen::MusicGenServerBuilder;
use songforge_config::Config;
use songforge_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(config)?;
        Self::spawn(server).await
    }

    /// Start a test server with a fixed generation seed
    ///
    /// Lets tests assert the exact seed forwarded to the provider.
    pub async fn start_with_seed(config: Config, seed: u32) -> anyhow::Result<Self> {
        let musicgen_state = Arc::new(
            MusicGenServerBuilder::new(&config)
                .with_seed_source(Arc::new(move || seed))
                .build(),
        );
        let server = Server::with_musicgen(config, Some(musicgen_state))?;
        Self::spawn(server).await
    }

    async fn spawn(server: Server) -> anyhow::Result<Self> {
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
