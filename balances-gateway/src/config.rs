//! Provider client settings.

use std::time::Duration;

/// Connection settings for the Stripe API.
#[derive(Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub api_base: String,
    /// Pinned API version sent as `Stripe-Version`, account default when unset
    pub api_version: Option<String>,
    pub max_network_retries: u32,
    pub initial_retry_delay: Duration,
    pub max_retry_delay: Duration,
    pub timeout: Duration,
}

impl StripeConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://api.stripe.com";

    /// Settings with the provider's usual defaults for the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base: Self::DEFAULT_API_BASE.to_string(),
            api_version: None,
            max_network_retries: 2,
            initial_retry_delay: Duration::from_millis(500),
            max_retry_delay: Duration::from_secs(5),
            timeout: Duration::from_secs(80),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_max_network_retries(mut self, retries: u32) -> Self {
        self.max_network_retries = retries;
        self
    }

    pub fn with_retry_delays(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_retry_delay = initial;
        self.max_retry_delay = max;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keeps the secret key out of logs.
impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("max_network_retries", &self.max_network_retries)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = StripeConfig::new("sk_test").with_api_base("http://localhost:12111/");
        assert_eq!(config.api_base, "http://localhost:12111");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", StripeConfig::new("sk_live_secret"));
        assert!(!rendered.contains("sk_live_secret"));
    }
}
