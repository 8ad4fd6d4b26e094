//! Balance snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn balance_object() -> String {
    "balance".to_string()
}

/// Funds in one currency, optionally broken down by payment source type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceAmount {
    /// Amount in the smallest currency unit
    pub amount: i64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_types: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BalanceAmount {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            source_types: None,
            extra: Map::new(),
        }
    }
}

/// Point-in-time balance of the provider account.
///
/// Returned to callers as-is; fields this type does not name are kept in
/// `extra` (`connect_reserved`, `instant_available`, `issuing`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default = "balance_object")]
    pub object: String,
    /// Funds available to be paid out
    #[serde(default)]
    pub available: Vec<BalanceAmount>,
    /// Funds not yet available
    #[serde(default)]
    pub pending: Vec<BalanceAmount>,
    #[serde(default)]
    pub livemode: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Balance {
    pub fn new(available: Vec<BalanceAmount>, pending: Vec<BalanceAmount>) -> Self {
        Self {
            object: balance_object(),
            available,
            pending,
            livemode: false,
            extra: Map::new(),
        }
    }

    /// Available amount for a currency (case-insensitive code match).
    pub fn available_in(&self, currency: &str) -> Option<i64> {
        self.available
            .iter()
            .find(|a| a.currency.eq_ignore_ascii_case(currency))
            .map(|a| a.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_payload_is_preserved() {
        let raw = serde_json::json!({
            "object": "balance",
            "available": [
                { "amount": 2217713, "currency": "usd", "source_types": { "card": 2217713 } }
            ],
            "connect_reserved": [{ "amount": 0, "currency": "usd" }],
            "livemode": false,
            "pending": [{ "amount": 146884, "currency": "usd" }]
        });

        let balance: Balance = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(balance.available_in("USD"), Some(2217713));
        assert_eq!(balance.pending[0].amount, 146884);
        assert!(balance.extra.contains_key("connect_reserved"));
        assert_eq!(serde_json::to_value(&balance).unwrap(), raw);
    }

    #[test]
    fn test_available_in_unknown_currency() {
        let balance = Balance::new(vec![BalanceAmount::new(100, "eur")], vec![]);
        assert_eq!(balance.available_in("usd"), None);
    }
}
