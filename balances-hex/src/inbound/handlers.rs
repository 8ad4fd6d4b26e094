//! HTTP request handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use balances_types::{AppError, BalanceGateway, FieldError, PaginationQuery};

use crate::BalanceAccessFacade;

pub(crate) const NO_BALANCE_MESSAGE: &str = "No balance records found.";
const QUERY_FIELD: &str = "query";

/// Application state shared across handlers.
pub struct AppState<G: BalanceGateway> {
    pub facade: BalanceAccessFacade<G>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
///
/// This is the one place errors are logged.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::Validation(errors) => {
                tracing::warn!(?errors, "request validation failed");

                let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for error in errors {
                    by_field.entry(error.field).or_default().push(error.message);
                }

                let body = serde_json::json!({
                    "title": "One or more validation errors occurred.",
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                    "errors": by_field,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            err @ AppError::ConflictingCursors => {
                let message = err.to_string();
                tracing::warn!("{}", message);
                (StatusCode::BAD_REQUEST, Json(message)).into_response()
            }
            AppError::RemoteService(message) => {
                tracing::error!(error = %message, "payment provider rejected the request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "Error": message })),
                )
                    .into_response()
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, Json(message)).into_response(),
            AppError::Unexpected(message) => {
                tracing::error!(error = %message, "unexpected failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Current balance of the provider account.
#[tracing::instrument(skip(state))]
pub async fn get_balance<G: BalanceGateway>(
    State(state): State<Arc<AppState<G>>>,
) -> Result<impl IntoResponse, ApiError> {
    let balance = state
        .facade
        .get_balance()
        .await?
        .ok_or_else(|| AppError::NotFound(NO_BALANCE_MESSAGE.into()))?;

    Ok(Json(balance))
}

/// One page of balance transactions.
#[tracing::instrument(skip(state))]
pub async fn list_balance_transactions<G: BalanceGateway>(
    State(state): State<Arc<AppState<G>>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(pairs) = params.map_err(|rejection| {
        AppError::Validation(vec![FieldError::new(QUERY_FIELD, rejection.body_text())])
    })?;
    let options = PaginationQuery::from_pairs(pairs).validate()?;
    let view = state.facade.list_transactions(&options).await?;
    Ok(Json(view))
}
