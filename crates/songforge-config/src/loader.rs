use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the provider base URL or health path is malformed
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ref base_url) = self.musicgen.base_url {
            url::Url::parse(base_url).map_err(|e| anyhow::anyhow!("invalid musicgen base_url '{base_url}': {e}"))?;
        }

        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("health path must start with '/': '{}'", self.server.health.path);
        }

        Ok(())
    }

    /// Whether a usable provider credential is configured
    ///
    /// An empty key (e.g. expanded from an unset environment variable with
    /// an empty default) counts as absent.
    pub fn has_provider_credential(&self) -> bool {
        self.musicgen
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::Config;

    #[test]
    fn minimal_config_parses() {
        let config: Config = toml::from_str(
            r#"
            [musicgen]
            api_key = "sk-test"
            "#,
        )
        .unwrap();

        config.validate().unwrap();
        assert!(config.has_provider_credential());
    }

    #[test]
    fn empty_api_key_counts_as_absent() {
        let config: Config = toml::from_str(
            r#"
            [musicgen]
            api_key = ""
            "#,
        )
        .unwrap();

        assert!(!config.has_provider_credential());
    }

    #[test]
    fn missing_api_key_counts_as_absent() {
        let config = Config::default();
        assert!(!config.has_provider_credential());
    }

    #[test]
    fn invalid_base_url_rejected() {
        let config: Config = toml::from_str(
            r#"
            [musicgen]
            base_url = "not a url"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_health_path_rejected() {
        let config: Config = toml::from_str(
            r#"
            [server.health]
            path = "health"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
