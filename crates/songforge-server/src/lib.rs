mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use songforge_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Currently infallible but kept fallible to match `serve`'s
    /// error-handling at the call site as subsystems grow
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Self::with_musicgen(config, None)
    }

    /// Build the server, optionally overriding the musicgen state
    ///
    /// Tests inject a pre-built musicgen server (e.g. with a fixed seed
    /// source) through this constructor.
    pub fn with_musicgen(config: Config, musicgen_state: Option<std::sync::Arc<musicgen::Server>>) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let musicgen_state = musicgen_state.unwrap_or_else(|| musicgen::build_server(&config));

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Music generation routes
        app = app.merge(musicgen::endpoint_router().with_state(musicgen_state));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // Cross-origin headers go on every response; the front end is
        // served from a different origin than the gateway
        let cors_config = config.server.cors.unwrap_or_default();
        app = app.layer(cors::cors_layer(&cors_config));

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
