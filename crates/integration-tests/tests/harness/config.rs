//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use songforge_config::{Config, HealthConfig, MusicGenConfig, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                musicgen: MusicGenConfig::default(),
            },
        }
    }

    /// Point the gateway at a mock provider with a test credential
    pub fn with_provider(mut self, base_url: &str) -> Self {
        self.config.musicgen = MusicGenConfig {
            api_key: Some(SecretString::from("test-key")),
            base_url: Some(base_url.to_owned()),
        };
        self
    }

    /// Leave the provider credential unset
    pub fn without_credential(mut self, base_url: &str) -> Self {
        self.config.musicgen = MusicGenConfig {
            api_key: None,
            base_url: Some(base_url.to_owned()),
        };
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
