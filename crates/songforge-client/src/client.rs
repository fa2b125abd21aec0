use url::Url;

use crate::error::{ClientError, Result};
use crate::types::{GenerationEnvelope, GenerationRequest};

/// Fallback message when a failure response has no parseable envelope
const GENERIC_FAILURE: &str = "Failed to generate music";

/// HTTP client for the Songforge gateway
#[derive(Debug, Clone)]
pub struct SongforgeClient {
    base_url: Url,
    http: reqwest::Client,
}

impl SongforgeClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submit a generation request and return the response envelope
    ///
    /// A non-success HTTP status becomes [`ClientError::Api`] carrying the
    /// gateway's error message so the UI can display it directly. The
    /// envelope of a successful response is returned unchanged.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationEnvelope> {
        let url = self
            .base_url
            .join("generate-music")
            .map_err(|e| ClientError::Config(format!("invalid endpoint URL: {e}")))?;

        tracing::debug!(%url, style = %request.style, "submitting generation request");

        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<GenerationEnvelope>().await {
                Ok(envelope) => envelope.error.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                Err(_) => GENERIC_FAILURE.to_string(),
            };

            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerationEnvelope>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}
