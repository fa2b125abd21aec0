use secrecy::SecretString;
use serde::Deserialize;

/// Music generation provider configuration
///
/// The credential is usually injected from the environment, e.g.
/// `api_key = '{{ env.STABILITY_API_KEY | default("") }}'`. An empty
/// string is treated the same as an absent key so a gateway can boot
/// without a credential and report the misconfiguration per request.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MusicGenConfig {
    /// Provider API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for the provider API
    #[serde(default)]
    pub base_url: Option<String>,
}
