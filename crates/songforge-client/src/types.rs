use serde::{Deserialize, Serialize};

/// Music generation request (mirrors the gateway wire format)
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub lyrics: String,
    pub style: String,
    pub tempo: String,
    pub mood: String,
    /// Clip length in seconds; the gateway clamps to the provider's range
    pub duration: u32,
}

/// Payload of a successful generation
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationData {
    pub id: String,
    /// "succeeded" or "failed"
    pub status: String,
    /// `data:audio/mp3;base64,...` URI ready for a media element
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    pub prompt: String,
    pub created_at: String,
}

/// The gateway's `{success, data|error}` response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationEnvelope {
    pub success: bool,
    pub data: Option<GenerationData>,
    pub error: Option<String>,
}
