//! Client configuration.

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "BREWPOS_API_URL";

const DEV_DEFAULT: &str = "http://localhost:8000/api";

/// The one piece of configuration the client needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from the environment, warning when the dev
    /// default is used.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => {
                tracing::warn!("{API_URL_ENV} not set; using dev default {DEV_DEFAULT}");
                Self::new(DEV_DEFAULT)
            }
        }
    }
}
