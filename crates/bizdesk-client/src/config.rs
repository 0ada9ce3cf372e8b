use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Environment variables consulted for the API base address, in priority order.
pub const BASE_URL_VARS: [&str; 2] = ["API_URL", "API_BASE_URL"];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// First non-empty value among `BASE_URL_VARS`, else the local default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_or(lookup, DEFAULT_BASE_URL)
    }

    /// First non-empty value among `BASE_URL_VARS`, else `fallback`.
    pub fn from_lookup_or<F>(lookup: F, fallback: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let baseUrl = BASE_URL_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| fallback.into());

        Self::new(baseUrl.trim())
    }

    /// Reads the process environment. Used server-side.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads values baked in at compile time. Used by the wasm bundle, which has no
    /// process environment of its own.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "API_URL" => option_env!("API_URL"),
                "API_BASE_URL" => option_env!("API_BASE_URL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first_wins(Some("https://a.example/api"), Some("https://b.example/api"), "https://a.example/api")]
    #[case::second_fallback(None, Some("https://b.example/api"), "https://b.example/api")]
    #[case::empty_is_unset(Some("  "), Some("https://b.example/api"), "https://b.example/api")]
    #[case::default(None, None, DEFAULT_BASE_URL)]
    fn test_base_url_precedence(
        #[case] apiUrl: Option<&str>,
        #[case] apiBaseUrl: Option<&str>,
        #[case] expected: &str,
    ) {
        let config = ClientConfig::from_lookup(|name| match name {
            "API_URL" => apiUrl.map(str::to_string),
            "API_BASE_URL" => apiBaseUrl.map(str::to_string),
            _ => None,
        });
        assert_eq!(config.base_url, expected);
    }

    #[test]
    fn test_fallback_used_when_environment_is_silent() {
        let config = ClientConfig::from_lookup_or(|_| None, "https://erp.example/api/v1");
        assert_eq!(config.base_url, "https://erp.example/api/v1");

        let overridden = ClientConfig::from_lookup_or(
            |name| (name == "API_BASE_URL").then(|| "https://staging.example/api".to_string()),
            "https://erp.example/api/v1",
        );
        assert_eq!(overridden.base_url, "https://staging.example/api");
    }
}
