//! Balance gateway port.
//!
//! The seam over the payment provider. Adapters (the Stripe HTTP client,
//! test doubles) implement this trait.

use crate::domain::{Balance, BalanceTransaction, RemoteList};
use crate::dto::ListQuery;
use crate::error::GatewayError;

/// Read-only access to the provider's balance resources.
///
/// One call is one provider round-trip; implementations must not follow
/// `has_more` on their own.
#[async_trait::async_trait]
pub trait BalanceGateway: Send + Sync + 'static {
    /// Fetches the current balance. `Ok(None)` when the provider has none.
    async fn get_balance(&self) -> Result<Option<Balance>, GatewayError>;

    /// Fetches one page of balance transactions.
    async fn list_balance_transactions(
        &self,
        query: ListQuery,
    ) -> Result<RemoteList<BalanceTransaction>, GatewayError>;
}
