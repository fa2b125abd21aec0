use serde::{Deserialize, Serialize};

/// Music generation request submitted by the front end
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationRequest {
    /// Lyrics the generated track should be themed on
    pub lyrics: String,
    /// Musical style (e.g. "pop", "jazz"); unknown values pass through
    pub style: String,
    /// Tempo ("slow", "medium", "fast"); unknown values pass through
    pub tempo: String,
    /// Mood (e.g. "happy", "romantic"); unknown values pass through
    pub mood: String,
    /// Requested clip length in seconds, clamped to the provider's bounds
    #[serde(default = "default_duration")]
    pub duration: u32,
}

/// Default clip length in seconds
fn default_duration() -> u32 {
    30
}

/// Generation status reported in the success payload
///
/// The gateway itself only ever emits `Succeeded` (failures travel as
/// the envelope's `error`); `Failed` exists to round-trip the wire
/// contract for consumers deserializing historical or third-party
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Succeeded,
    Failed,
}

/// Payload of a successful generation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationData {
    /// Opaque identifier derived from the creation time
    pub id: String,
    pub status: GenerationStatus,
    /// Generated audio embedded as a `data:audio/mp3;base64,...` URI
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    /// The prompt that was sent to the provider
    pub prompt: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

/// Envelope wrapping every endpoint response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GenerationData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationEnvelope {
    pub fn success(data: GenerationData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_defaults_to_thirty() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"lyrics":"la","style":"pop","tempo":"fast","mood":"happy"}"#).unwrap();
        assert_eq!(request.duration, 30);
    }

    #[test]
    fn success_envelope_omits_error_field() {
        let envelope = GenerationEnvelope::success(GenerationData {
            id: "0".to_string(),
            status: GenerationStatus::Succeeded,
            audio_url: "data:audio/mp3;base64,".to_string(),
            prompt: "p".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        });

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["status"], "succeeded");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_envelope_omits_data_field() {
        let json = serde_json::to_value(GenerationEnvelope::failure("nope".to_string())).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("data").is_none());
    }
}
