pub mod stability;

use async_trait::async_trait;

/// Fixed guidance scale sent with every generation
pub const CFG_SCALE: u32 = 7;

/// Output format requested from the provider
pub const OUTPUT_FORMAT: &str = "mp3";

/// Provider-facing request, fully resolved by the endpoint
///
/// Duration is already clamped and the seed already drawn by the time
/// this is built; providers serialize it as-is.
#[derive(Debug, Clone)]
pub struct ProviderPayload {
    pub prompt: String,
    /// Clip length in seconds, within the provider's supported range
    pub duration: u32,
    pub cfg_scale: u32,
    pub seed: u32,
    pub output_format: &'static str,
}

/// Trait for text-to-audio provider implementations
#[async_trait]
pub trait AudioProvider: Send + Sync {
    /// Generate an audio clip, returning the raw encoded bytes
    async fn generate(&self, payload: &ProviderPayload) -> crate::error::Result<Vec<u8>>;

    /// Get the provider name
    fn name(&self) -> &str;
}
