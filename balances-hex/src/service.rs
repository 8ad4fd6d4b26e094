//! Balance Access Facade
//!
//! Translates client paging parameters into provider list queries and
//! provider pages into client views. Contains NO infrastructure logic.

use balances_types::{
    AppError, Balance, BalanceGateway, BalanceTransaction, BalanceTransactionView, ListQuery,
    PaginationOptions, RemoteList,
};

/// Application service over the provider's balance resources.
///
/// Stateless: every call is exactly one gateway round-trip, and the caller
/// drives paging by sending back the cursors of the previous view.
pub struct BalanceAccessFacade<G: BalanceGateway> {
    gateway: G,
}

impl<G: BalanceGateway> BalanceAccessFacade<G> {
    /// Creates a new facade over the given gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Gets the current balance snapshot, `None` when the provider has none.
    #[tracing::instrument(skip(self))]
    pub async fn get_balance(&self) -> Result<Option<Balance>, AppError> {
        self.gateway.get_balance().await.map_err(Into::into)
    }

    /// Lists one page of balance transactions.
    ///
    /// Expects options that already passed validation. If both cursors are
    /// set anyway, the forward cursor is used.
    #[tracing::instrument(skip(self), fields(page_size = options.page_size))]
    pub async fn list_transactions(
        &self,
        options: &PaginationOptions,
    ) -> Result<BalanceTransactionView, AppError> {
        let query = build_list_query(options);
        let page = self.gateway.list_balance_transactions(query).await?;

        tracing::debug!(items = page.len(), has_more = page.has_more, "fetched page");

        Ok(into_view(page))
    }
}

fn build_list_query(options: &PaginationOptions) -> ListQuery {
    let mut query = ListQuery::with_limit(options.page_size);

    if let Some(cursor) = options.forward_cursor() {
        query.starting_after = Some(cursor.to_string());
    } else if let Some(cursor) = options.backward_cursor() {
        query.ending_before = Some(cursor.to_string());
    }

    query
}

fn into_view(page: RemoteList<BalanceTransaction>) -> BalanceTransactionView {
    // Provider order is newest-first and is trusted as-is.
    let cursors = match (page.first(), page.last()) {
        (Some(first), Some(last)) => Some((last.id.to_string(), first.id.to_string())),
        _ => None,
    };

    match cursors {
        Some((start_after, end_after)) => BalanceTransactionView {
            balance_transactions: Some(page),
            start_after: Some(start_after),
            end_after: Some(end_after),
        },
        None => BalanceTransactionView::default(),
    }
}
