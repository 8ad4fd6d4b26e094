//! OpenAPI document for the Balances API.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use balances_types::dto::{BalanceTransactionView, PaginationOptions};
use balances_types::error::FieldError;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Current balance of the provider account
#[utoipa::path(
    get,
    path = "/api/balances",
    tag = "balances",
    responses(
        (status = 200, description = "Balance snapshot, exactly as the provider reported it", body = inline(serde_json::Value)),
        (status = 400, description = "Provider rejected the request", body = inline(serde_json::Value), example = json!({"Error": "Invalid API Key provided"})),
        (status = 404, description = "Provider returned no balance", body = String, example = json!("No balance records found.")),
        (status = 500, description = "Unexpected failure (empty body)")
    )
)]
async fn get_balance() {}

/// One page of balance transactions
#[utoipa::path(
    get,
    path = "/api/balancetransactions",
    tag = "balances",
    params(
        ("pageSize" = Option<u32>, Query, description = "Items per page, 1 to 100 (default 10)"),
        ("startAfter" = Option<String>, Query, description = "Return items after this transaction id"),
        ("endBefore" = Option<String>, Query, description = "Return items before this transaction id; exclusive with startAfter"),
    ),
    responses(
        (status = 200, description = "Page of transactions with paging cursors", body = BalanceTransactionView),
        (status = 400, description = "Validation failure, conflicting cursors, or provider error"),
        (status = 500, description = "Unexpected failure (empty body)")
    )
)]
async fn list_balance_transactions() {}

/// OpenAPI documentation for the Balances API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Balances Proxy API",
        version = "1.0.0",
        description = "Read-only access to the payment provider's balance and balance transactions.\n\n## Paging\n\nEach response carries `StartAfter` (id of the last item) and `EndAfter` (id of the first item). Send `startAfter` to move forward or `endBefore` to move back. An empty page has no cursors.",
        license(name = "MIT"),
    ),
    paths(health, get_balance, list_balance_transactions),
    components(schemas(BalanceTransactionView, PaginationOptions, FieldError)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "balances", description = "Balance and balance transaction retrieval"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/balances"));
        assert!(doc.paths.paths.contains_key("/api/balancetransactions"));
    }
}
