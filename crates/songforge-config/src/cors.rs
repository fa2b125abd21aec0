use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
///
/// The gateway serves browser front ends directly, so responses carry
/// permissive cross-origin headers unless narrowed here.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default = "default_methods")]
    pub methods: AnyOrArray,
    /// Allowed headers (wildcard "*" or explicit list)
    #[serde(default = "default_headers")]
    pub headers: AnyOrArray,
    /// Headers to expose to the browser
    #[serde(default)]
    pub expose_headers: Vec<String>,
    /// Allow credentials
    #[serde(default)]
    pub credentials: bool,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    /// Matches the headers the endpoint always sent in the original
    /// deployment: any origin, `GET, POST, OPTIONS`, and the two request
    /// headers a JSON submission needs.
    fn default() -> Self {
        Self {
            origins: AnyOrArray::Any,
            methods: default_methods(),
            headers: default_headers(),
            expose_headers: Vec::new(),
            credentials: false,
            max_age: None,
        }
    }
}

fn default_methods() -> AnyOrArray {
    AnyOrArray::List(vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()])
}

fn default_headers() -> AnyOrArray {
    AnyOrArray::List(vec!["Content-Type".to_string(), "Authorization".to_string()])
}

/// Either a wildcard "*" or explicit list of values
#[derive(Debug, Clone)]
pub enum AnyOrArray {
    /// Match any value
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl Default for AnyOrArray {
    fn default() -> Self {
        Self::Any
    }
}

impl<'de> Deserialize<'de> for AnyOrArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de;

        struct AnyOrArrayVisitor;

        impl<'de> de::Visitor<'de> for AnyOrArrayVisitor {
            type Value = AnyOrArray;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("\"*\" or array of strings")
            }

            fn visit_str<E>(self, v: &str) -> Result<AnyOrArray, E>
            where
                E: de::Error,
            {
                if v == "*" {
                    Ok(AnyOrArray::Any)
                } else {
                    Ok(AnyOrArray::List(vec![v.to_string()]))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<AnyOrArray, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut values = Vec::new();
                while let Some(val) = seq.next_element::<String>()? {
                    if val == "*" {
                        return Ok(AnyOrArray::Any);
                    }
                    values.push(val);
                }
                Ok(AnyOrArray::List(values))
            }
        }

        deserializer.deserialize_any(AnyOrArrayVisitor)
    }
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}
