//! # Balances Client SDK
//!
//! A typed Rust client for the Balances API.

use balances_types::{Balance, BalanceTransaction, BalanceTransactionView, PaginationOptions};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Balances API client.
pub struct BalancesClient {
    base_url: String,
    http: Client,
}

impl BalancesClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Gets the current balance, `None` when the provider has none.
    pub async fn balance(&self) -> Result<Option<Balance>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/balances", self.base_url))
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.handle_response(resp).await.map(Some)
    }

    /// Gets one page of balance transactions.
    pub async fn balance_transactions(
        &self,
        options: &PaginationOptions,
    ) -> Result<BalanceTransactionView, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/balancetransactions", self.base_url))
            .query(options)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Walks forward from the newest transaction until an empty page.
    ///
    /// Each step sends the previous page's `StartAfter` back as `startAfter`.
    pub async fn all_balance_transactions(
        &self,
        page_size: u32,
    ) -> Result<Vec<BalanceTransaction>, ClientError> {
        let mut options = PaginationOptions::new(page_size);
        let mut transactions = Vec::new();

        loop {
            let view = self.balance_transactions(&options).await?;
            let Some(cursor) = view.start_after else {
                break;
            };
            if let Some(page) = view.balance_transactions {
                transactions.extend(page.data);
            }
            options = PaginationOptions::new(page_size).starting_after(cursor);
        }

        Ok(transactions)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Pulls a readable message out of an error body.
///
/// The server answers with `{"Error": ".."}`, a bare JSON string, or a
/// validation document with per-field `errors`.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    if let Some(message) = value.as_str() {
        return message.to_string();
    }
    if let Some(message) = value.get("Error").and_then(|e| e.as_str()) {
        return message.to_string();
    }
    if let Some(errors) = value.get("errors").and_then(|e| e.as_object()) {
        let messages: Vec<String> = errors
            .values()
            .filter_map(|v| v.as_array())
            .flatten()
            .filter_map(|m| m.as_str().map(String::from))
            .collect();
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }

    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BalancesClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = BalancesClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_error_message_from_provider_error() {
        assert_eq!(
            error_message(r#"{"Error":"Test Stripe Error"}"#),
            "Test Stripe Error"
        );
    }

    #[test]
    fn test_error_message_from_json_string() {
        assert_eq!(
            error_message(r#""No balance records found.""#),
            "No balance records found."
        );
    }

    #[test]
    fn test_error_message_from_validation_document() {
        let body = r#"{"title":"One or more validation errors occurred.","status":400,"errors":{"PageSize":["PageSize must be between 1 and 100."]}}"#;
        assert_eq!(error_message(body), "PageSize must be between 1 and 100.");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message(""), "");
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }
}
