//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use balances_gateway::StripeConfig;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub stripe: StripeConfig,
    /// Export spans over OTLP when an endpoint is configured
    pub otel_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()?;

        let secret_key = lookup("STRIPE_SECRET_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("STRIPE_SECRET_KEY environment variable is required"))?;

        let mut stripe = StripeConfig::new(secret_key);

        if let Some(api_base) = lookup("STRIPE_API_BASE") {
            stripe = stripe.with_api_base(api_base);
        }
        if let Some(api_version) = lookup("STRIPE_API_VERSION") {
            stripe = stripe.with_api_version(api_version);
        }
        if let Some(retries) = lookup("STRIPE_MAX_NETWORK_RETRIES") {
            stripe = stripe.with_max_network_retries(retries.parse()?);
        }
        if let Some(secs) = lookup("STRIPE_TIMEOUT_SECS") {
            stripe = stripe.with_timeout(Duration::from_secs(secs.parse()?));
        }

        let otel_enabled = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").is_some();

        Ok(Self {
            port,
            stripe,
            otel_enabled,
        })
    }
}
