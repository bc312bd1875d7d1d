//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::http::{ApiClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::presentation::guard::GuardConfig;

/// Storage key under which the session token is persisted
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Administrative account that is always treated as approved/verified/active
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@credentialkavach.gov.in";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Identity backend address
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Storage key of the session token
    pub token_storage_key: String,
    /// Account whose flags are forced on (`None` disables the override)
    pub admin_override_email: Option<String>,
    /// Block unverified accounts behind the verify-email interstitial
    pub require_email_verification: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            admin_override_email: Some(DEFAULT_ADMIN_EMAIL.to_string()),
            require_email_verification: false,
        }
    }
}

impl AuthConfig {
    /// Create config for development (local backend, fail fast)
    pub fn development() -> Self {
        Self {
            api_base_url: "http://localhost:5001".to_string(),
            request_timeout: Duration::from_secs(10),
            ..Self::default()
        }
    }

    /// Guard settings derived from this config
    pub fn guard_config(&self) -> GuardConfig {
        GuardConfig {
            require_email_verification: self.require_email_verification,
        }
    }

    /// HTTP client settings derived from this config
    pub fn api_client_config(&self) -> ApiClientConfig {
        ApiClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: self.request_timeout,
            ..ApiClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5001");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(
            config.admin_override_email.as_deref(),
            Some("admin@credentialkavach.gov.in")
        );
        assert!(!config.require_email_verification);
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn test_derived_configs() {
        let config = AuthConfig {
            require_email_verification: true,
            ..AuthConfig::default()
        };
        assert!(config.guard_config().require_email_verification);

        let api = config.api_client_config();
        assert_eq!(api.base_url, config.api_base_url);
        assert_eq!(api.timeout, config.request_timeout);
    }
}
