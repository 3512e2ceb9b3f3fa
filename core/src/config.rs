//! Client configuration.

use std::time::Duration;

use crate::error::ApiError;

/// Default API base URL, matching the mock server's default port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_ENV: &str = "ALUMNOS_API_URL";
pub const TIMEOUT_ENV: &str = "ALUMNOS_API_TIMEOUT_SECS";

/// Fixed configuration of an `AlumnosService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API; `api/alumnos` is appended to it.
    pub base_url: String,
    /// Per-request timeout applied by the transport.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `ALUMNOS_API_URL` and `ALUMNOS_API_TIMEOUT_SECS`, falling back to
    /// the defaults for unset variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            if base_url.trim().is_empty() {
                return Err(ApiError::InvalidConfig(format!("{BASE_URL_ENV} is empty")));
            }
            config.base_url = base_url;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ApiError::InvalidConfig(format!("{TIMEOUT_ENV} must be whole seconds, got {secs:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
