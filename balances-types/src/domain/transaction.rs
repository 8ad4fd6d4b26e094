//! Balance transaction record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider-assigned identifier of a balance transaction (`txn_...`).
///
/// Opaque to this service: it is only ever echoed back as a paging cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single movement of funds as reported by the payment provider.
///
/// Only `id` is interpreted. Every other provider field is kept verbatim in
/// `fields` so the record serializes back out exactly as it came in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    pub id: TransactionId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl BalanceTransaction {
    /// Creates a record carrying only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(id),
            fields: Map::new(),
        }
    }

    /// Adds a provider field, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Gross amount in the smallest currency unit, if the provider sent one.
    pub fn amount(&self) -> Option<i64> {
        self.fields.get("amount").and_then(Value::as_i64)
    }

    /// Three-letter ISO currency code, lowercase as the provider sends it.
    pub fn currency(&self) -> Option<&str> {
        self.fields.get("currency").and_then(Value::as_str)
    }

    /// Provider transaction type (`charge`, `payout`, `refund`, ...).
    pub fn kind(&self) -> Option<&str> {
        self.fields.get("type").and_then(Value::as_str)
    }
}
