use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use jiff::Timestamp;
use rand::Rng;

use crate::{
    error::MusicGenError,
    prompt::build_prompt,
    provider::{AudioProvider, CFG_SCALE, OUTPUT_FORMAT, ProviderPayload, stability::StabilityAudioProvider},
    types::{GenerationData, GenerationRequest, GenerationStatus},
};

/// Provider-imposed clip length bounds in seconds
const MIN_DURATION_SECS: u32 = 10;
const MAX_DURATION_SECS: u32 = 30;

/// Seeds are drawn from `[0, SEED_RANGE)`
const SEED_RANGE: u32 = 1_000_000;

/// Injectable random seed source
///
/// Production uses the thread RNG; tests supply a fixed value so the
/// outbound payload is deterministic.
pub type SeedSource = Arc<dyn Fn() -> u32 + Send + Sync>;

/// Music generation server backing the `/generate-music` endpoint
///
/// Stateless: each request builds its prompt, calls the provider once,
/// and encodes the result. Nothing is cached or stored across requests.
pub struct Server {
    provider: Option<Box<dyn AudioProvider>>,
    seed_source: SeedSource,
}

impl Server {
    /// Handle one generation request end to end
    ///
    /// The credential check runs before input validation so a
    /// misconfigured gateway reports 500 regardless of what was sent.
    pub async fn generate(&self, request: GenerationRequest) -> crate::error::Result<GenerationData> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| MusicGenError::ConfigError("API key not configured".to_string()))?;

        if request.lyrics.trim().is_empty() {
            return Err(MusicGenError::InvalidRequest("lyrics must not be empty".to_string()));
        }

        let prompt = build_prompt(&request);
        let duration = request.duration.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        let seed = (self.seed_source)();

        let payload = ProviderPayload {
            prompt,
            duration,
            cfg_scale: CFG_SCALE,
            seed,
            output_format: OUTPUT_FORMAT,
        };

        // Diagnostics only; the credential is never logged
        tracing::info!(
            provider = %provider.name(),
            prompt = %payload.prompt,
            duration = payload.duration,
            cfg_scale = payload.cfg_scale,
            seed = payload.seed,
            output_format = payload.output_format,
            "generating music"
        );

        let audio = provider.generate(&payload).await?;

        let created = Timestamp::now();

        Ok(GenerationData {
            id: created.as_millisecond().to_string(),
            status: GenerationStatus::Succeeded,
            audio_url: format!("data:audio/mp3;base64,{}", BASE64.encode(&audio)),
            prompt: payload.prompt,
            created_at: created.to_string(),
        })
    }
}

/// Builder for constructing the music generation server from configuration
pub struct MusicGenServerBuilder<'a> {
    config: &'a songforge_config::Config,
    seed_source: Option<SeedSource>,
}

impl<'a> MusicGenServerBuilder<'a> {
    pub const fn new(config: &'a songforge_config::Config) -> Self {
        Self {
            config,
            seed_source: None,
        }
    }

    /// Override the seed source (used by tests for determinism)
    #[must_use]
    pub fn with_seed_source(mut self, seed_source: SeedSource) -> Self {
        self.seed_source = Some(seed_source);
        self
    }

    pub fn build(self) -> Server {
        let provider: Option<Box<dyn AudioProvider>> = if self.config.has_provider_credential() {
            let api_key = self
                .config
                .musicgen
                .api_key
                .clone()
                .expect("credential presence checked above");

            tracing::debug!("initializing Stability AI audio provider");

            Some(Box::new(StabilityAudioProvider::new(
                "stability".to_string(),
                api_key,
                self.config.musicgen.base_url.clone(),
            )))
        } else {
            // Boot anyway; requests fail with a configuration error
            tracing::warn!("no provider API key configured, generation requests will fail");
            None
        };

        let seed_source = self
            .seed_source
            .unwrap_or_else(|| Arc::new(|| rand::rng().random_range(0..SEED_RANGE)));

        Server { provider, seed_source }
    }
}
