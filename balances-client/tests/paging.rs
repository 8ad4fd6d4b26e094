//! End-to-end paging through a running server.
//!
//! The server is backed by an in-memory gateway that applies cursors the way
//! the provider does: newest first, `starting_after` moves toward older items
//! and `ending_before` toward newer ones.

use async_trait::async_trait;

use balances_client::{BalancesClient, ClientError};
use balances_hex::{BalanceAccessFacade, inbound::HttpServer};
use balances_types::{
    Balance, BalanceAmount, BalanceGateway, BalanceTransaction, GatewayError, ListQuery,
    PaginationOptions, RemoteList,
};

struct InMemoryLedger {
    /// Newest first
    ids: Vec<String>,
}

impl InMemoryLedger {
    fn with_transactions(count: usize) -> Self {
        Self {
            ids: (1..=count).rev().map(|n| format!("txn_{:03}", n)).collect(),
        }
    }

    fn position(&self, id: &str) -> Result<usize, GatewayError> {
        self.ids.iter().position(|i| i == id).ok_or_else(|| {
            GatewayError::provider(format!("No such balance transaction: '{}'", id))
        })
    }
}

#[async_trait]
impl BalanceGateway for InMemoryLedger {
    async fn get_balance(&self) -> Result<Option<Balance>, GatewayError> {
        Ok(Some(Balance::new(vec![BalanceAmount::new(9900, "usd")], vec![])))
    }

    async fn list_balance_transactions(
        &self,
        query: ListQuery,
    ) -> Result<RemoteList<BalanceTransaction>, GatewayError> {
        let limit = query.limit as usize;
        let window: &[String] = if let Some(after) = &query.starting_after {
            let start = self.position(after)? + 1;
            let end = (start + limit).min(self.ids.len());
            &self.ids[start..end]
        } else if let Some(before) = &query.ending_before {
            let end = self.position(before)?;
            let start = end.saturating_sub(limit);
            &self.ids[start..end]
        } else {
            &self.ids[..limit.min(self.ids.len())]
        };

        let data = window.iter().map(|id| BalanceTransaction::new(id.as_str())).collect();
        Ok(RemoteList::new(data, false, "/v1/balance_transactions"))
    }
}

async fn spawn_server(gateway: InMemoryLedger) -> BalancesClient {
    let router = HttpServer::new(BalanceAccessFacade::new(gateway)).router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    BalancesClient::new(format!("http://{}", addr))
}

fn ids(transactions: &[BalanceTransaction]) -> Vec<&str> {
    transactions.iter().map(|t| t.id.as_str()).collect()
}

#[tokio::test]
async fn test_walks_every_page_forward() {
    let client = spawn_server(InMemoryLedger::with_transactions(7)).await;

    let all = client.all_balance_transactions(3).await.unwrap();

    assert_eq!(
        ids(&all),
        vec!["txn_007", "txn_006", "txn_005", "txn_004", "txn_003", "txn_002", "txn_001"]
    );
}

#[tokio::test]
async fn test_back_cursor_returns_previous_page() {
    let client = spawn_server(InMemoryLedger::with_transactions(6)).await;

    let first = client
        .balance_transactions(&PaginationOptions::new(2))
        .await
        .unwrap();
    let second = client
        .balance_transactions(
            &PaginationOptions::new(2).starting_after(first.start_after.clone().unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(ids(second.transactions()), vec!["txn_004", "txn_003"]);

    let back = client
        .balance_transactions(
            &PaginationOptions::new(2).ending_before(second.end_after.clone().unwrap()),
        )
        .await
        .unwrap();

    assert_eq!(back, first);
}

#[tokio::test]
async fn test_same_cursor_gives_same_page() {
    let client = spawn_server(InMemoryLedger::with_transactions(5)).await;
    let options = PaginationOptions::new(2).starting_after("txn_004");

    let once = client.balance_transactions(&options).await.unwrap();
    let twice = client.balance_transactions(&options).await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.start_after.as_deref(), Some("txn_002"));
    assert_eq!(once.end_after.as_deref(), Some("txn_003"));
}

#[tokio::test]
async fn test_unknown_cursor_surfaces_provider_message() {
    let client = spawn_server(InMemoryLedger::with_transactions(3)).await;

    let err = client
        .balance_transactions(&PaginationOptions::new(2).starting_after("txn_missing"))
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "No such balance transaction: 'txn_missing'");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_balance_and_health() {
    let client = spawn_server(InMemoryLedger::with_transactions(0)).await;

    assert!(client.health().await.unwrap());
    let balance = client.balance().await.unwrap().unwrap();
    assert_eq!(balance.available_in("usd"), Some(9900));
}
