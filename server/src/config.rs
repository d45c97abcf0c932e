//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DOCUMENT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_API_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the document API, without a trailing slash.
    pub document_api_url: String,
    pub timeouts: ApiTimeouts,
    /// Largest request body forwarded to the document API.
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DOCUMENT_API_URL`: default `http://127.0.0.1:8000`
    /// - `API_REQUEST_TIMEOUT_SECS`: default 120
    /// - `API_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAX_BODY_BYTES`: default 50 MiB
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let raw_url = lookup("DOCUMENT_API_URL").unwrap_or_else(|| DEFAULT_DOCUMENT_API_URL.to_owned());
        let document_api_url = raw_url.trim().trim_end_matches('/').to_owned();
        if !(document_api_url.starts_with("http://") || document_api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl { var: "DOCUMENT_API_URL", value: raw_url });
        }

        let timeouts = ApiTimeouts {
            request_secs: parse_or(
                "API_REQUEST_TIMEOUT_SECS",
                lookup("API_REQUEST_TIMEOUT_SECS"),
                DEFAULT_API_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "API_CONNECT_TIMEOUT_SECS",
                lookup("API_CONNECT_TIMEOUT_SECS"),
                DEFAULT_API_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let max_body_bytes = parse_or("MAX_BODY_BYTES", lookup("MAX_BODY_BYTES"), DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self { port, document_api_url, timeouts, max_body_bytes })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
