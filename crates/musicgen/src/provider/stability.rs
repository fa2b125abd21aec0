use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::MusicGenError,
    http_client::http_client,
    provider::{AudioProvider, ProviderPayload},
};

const DEFAULT_STABILITY_API_URL: &str = "https://api.stability.ai";

const TEXT_TO_AUDIO_PATH: &str = "/v2beta/audio/stable-audio-2/text-to-audio";

/// Stability AI text-to-audio provider
pub struct StabilityAudioProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    name: String,
}

impl StabilityAudioProvider {
    pub fn new(name: String, api_key: SecretString, base_url: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_STABILITY_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
            name,
        }
    }
}

#[async_trait]
impl AudioProvider for StabilityAudioProvider {
    async fn generate(&self, payload: &ProviderPayload) -> crate::error::Result<Vec<u8>> {
        let url = format!("{}{TEXT_TO_AUDIO_PATH}", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            provider = %self.name,
            duration = payload.duration,
            seed = payload.seed,
            "sending text-to-audio request"
        );

        // The stable-audio endpoint takes a multipart form, not JSON
        let form = reqwest::multipart::Form::new()
            .text("prompt", payload.prompt.clone())
            .text("duration", payload.duration.to_string())
            .text("cfg_scale", payload.cfg_scale.to_string())
            .text("seed", payload.seed.to_string())
            .text("output_format", payload.output_format);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .header("Accept", "audio/*")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "text-to-audio request failed");
                MusicGenError::InternalError(Some(format!("Failed to send request to Stability AI: {e}")))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "Stability AI API error: {error_text}");

            return Err(MusicGenError::ProviderApiError {
                status: status.as_u16(),
                message: format!("Stability AI API error: {} - {error_text}", status.as_u16()),
            });
        }

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to read audio response body");
            MusicGenError::InternalError(None)
        })?;

        tracing::debug!(provider = %self.name, bytes = audio.len(), "text-to-audio generation complete");

        Ok(audio.to_vec())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
