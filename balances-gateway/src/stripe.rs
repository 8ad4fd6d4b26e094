//! Stripe REST adapter.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use balances_types::{
    Balance, BalanceGateway, BalanceTransaction, GatewayError, ListQuery, RemoteList,
};

use crate::config::StripeConfig;
use crate::retry;

const BALANCE_PATH: &str = "/v1/balance";
const BALANCE_TRANSACTIONS_PATH: &str = "/v1/balance_transactions";

/// Error envelope the provider returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
}

/// `BalanceGateway` backed by the Stripe REST API.
pub struct StripeGateway {
    config: StripeConfig,
    http: Client,
}

impl StripeGateway {
    /// Builds the HTTP client for the given settings.
    pub fn new(config: StripeConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Sends a GET, retrying transport failures and retryable statuses.
    async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response, GatewayError> {
        let url = format!("{}{}", self.config.api_base, path);
        let mut retries = 0;

        loop {
            let mut req = self
                .http
                .get(&url)
                .bearer_auth(&self.config.secret_key)
                .query(query);
            if let Some(version) = &self.config.api_version {
                req = req.header("Stripe-Version", version);
            }

            let can_retry = retries < self.config.max_network_retries;

            match req.send().await {
                Ok(resp) if can_retry && retry::should_retry(resp.status(), resp.headers()) => {
                    tracing::warn!(
                        status = resp.status().as_u16(),
                        attempt = retries + 1,
                        "retrying provider request"
                    );
                }
                Ok(resp) => return Ok(resp),
                Err(e) if can_retry && retry::should_retry_error(&e) => {
                    tracing::warn!(error = %e, attempt = retries + 1, "retrying provider request");
                }
                Err(e) => return Err(GatewayError::Transport(e.to_string())),
            }

            let delay = retry::backoff_delay(
                retries,
                self.config.initial_retry_delay,
                self.config.max_retry_delay,
            );
            tokio::time::sleep(delay).await;
            retries += 1;
        }
    }
}

#[async_trait]
impl BalanceGateway for StripeGateway {
    #[tracing::instrument(skip(self))]
    async fn get_balance(&self) -> Result<Option<Balance>, GatewayError> {
        let no_params: [(&str, &str); 0] = [];
        let resp = self.get(BALANCE_PATH, &no_params).await?;
        let (status, body) = read_body(resp).await?;

        // A bare 404 or an empty success body means no balance. A 404 that
        // carries an error envelope is the provider rejecting the request.
        if status == StatusCode::NOT_FOUND
            && serde_json::from_str::<ErrorEnvelope>(&body).is_err()
        {
            return Ok(None);
        }
        if status.is_success() && matches!(body.trim(), "" | "null") {
            return Ok(None);
        }

        decode(status, &body).map(Some)
    }

    #[tracing::instrument(skip(self))]
    async fn list_balance_transactions(
        &self,
        query: ListQuery,
    ) -> Result<RemoteList<BalanceTransaction>, GatewayError> {
        let resp = self.get(BALANCE_TRANSACTIONS_PATH, &query).await?;
        read_json(resp).await
    }
}

async fn read_body(resp: Response) -> Result<(StatusCode, String), GatewayError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;
    Ok((status, body))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, GatewayError> {
    let (status, body) = read_body(resp).await?;
    decode(status, &body)
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, GatewayError> {
    if status.is_success() {
        serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
    } else {
        Err(provider_error(status, body))
    }
}

fn provider_error(status: StatusCode, body: &str) -> GatewayError {
    let fallback = || format!("Unexpected HTTP status {}", status.as_u16());

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            tracing::debug!(kind = ?envelope.error.kind, code = ?envelope.error.code, "provider error");
            GatewayError::Provider {
                message: envelope.error.message.unwrap_or_else(fallback),
                status: Some(status.as_u16()),
                code: envelope.error.code,
            }
        }
        Err(_) => GatewayError::Provider {
            message: fallback(),
            status: Some(status.as_u16()),
            code: None,
        },
    }
}
