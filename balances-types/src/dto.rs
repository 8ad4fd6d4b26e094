//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BalanceTransaction, RemoteList};
use crate::error::{AppError, FieldError};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;

const PAGE_SIZE_FIELD: &str = "PageSize";

// ─────────────────────────────────────────────────────────────────────────────
// Paging DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Raw paging parameters exactly as they arrive on the query string.
///
/// Values stay strings so that a malformed `pageSize` is reported as a field
/// error rather than a generic extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationQuery {
    pub page_size: Option<String>,
    pub start_after: Option<String>,
    pub end_before: Option<String>,
}

impl PaginationQuery {
    /// Binds query-string pairs to the paging fields.
    ///
    /// Keys match case-insensitively (`pageSize`, `PageSize`). A key given
    /// more than once keeps every value, comma-joined, so `pageSize=5&PageSize=6`
    /// fails validation as `'5,6'`. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_ref().to_ascii_lowercase().as_str() {
                "pagesize" => &mut query.page_size,
                "startafter" => &mut query.start_after,
                "endbefore" => &mut query.end_before,
                _ => continue,
            };
            let value = value.into();
            *slot = Some(match slot.take() {
                Some(existing) => format!("{},{}", existing, value),
                None => value,
            });
        }

        query
    }

    /// Validates the raw parameters.
    ///
    /// Structural problems are reported first, all at once. The cursor
    /// exclusivity rule is only checked once the structure is sound.
    pub fn validate(self) -> Result<PaginationOptions, AppError> {
        let page_size = parse_page_size(self.page_size.as_deref())
            .map_err(|field_error| AppError::Validation(vec![field_error]))?;

        let options = PaginationOptions {
            page_size,
            start_after: self.start_after,
            end_before: self.end_before,
        };

        if options.has_conflicting_cursors() {
            return Err(AppError::ConflictingCursors);
        }

        Ok(options)
    }
}

fn parse_page_size(raw: Option<&str>) -> Result<u32, FieldError> {
    let raw = match raw.map(str::trim) {
        None => return Ok(DEFAULT_PAGE_SIZE),
        Some("") => {
            return Err(FieldError::new(
                PAGE_SIZE_FIELD,
                "The PageSize field is required.",
            ));
        }
        Some(raw) => raw,
    };

    let value: i64 = raw.parse().map_err(|_| {
        FieldError::new(
            PAGE_SIZE_FIELD,
            format!("The value '{}' is not valid for PageSize.", raw),
        )
    })?;

    if !(MIN_PAGE_SIZE as i64..=MAX_PAGE_SIZE as i64).contains(&value) {
        return Err(FieldError::new(
            PAGE_SIZE_FIELD,
            format!(
                "PageSize must be between {} and {}.",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE
            ),
        ));
    }

    Ok(value as u32)
}

/// Validated client-facing paging parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    /// Items per page, between 1 and 100
    #[schema(example = 10, minimum = 1, maximum = 100)]
    pub page_size: u32,
    /// Return items after this transaction id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "txn_1NirD82eZvKYlo2CIvbtLWuY")]
    pub start_after: Option<String>,
    /// Return items before this transaction id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_before: Option<String>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationOptions {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            start_after: None,
            end_before: None,
        }
    }

    pub fn starting_after(mut self, cursor: impl Into<String>) -> Self {
        self.start_after = Some(cursor.into());
        self
    }

    pub fn ending_before(mut self, cursor: impl Into<String>) -> Self {
        self.end_before = Some(cursor.into());
        self
    }

    /// Forward cursor, ignoring blank values.
    pub fn forward_cursor(&self) -> Option<&str> {
        non_blank(self.start_after.as_deref())
    }

    /// Backward cursor, ignoring blank values.
    pub fn backward_cursor(&self) -> Option<&str> {
        non_blank(self.end_before.as_deref())
    }

    pub fn has_conflicting_cursors(&self) -> bool {
        self.forward_cursor().is_some() && self.backward_cursor().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider Query
// ─────────────────────────────────────────────────────────────────────────────

/// Provider-native list query (`limit`, `starting_after`, `ending_before`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

impl ListQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            starting_after: None,
            ending_before: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Views
// ─────────────────────────────────────────────────────────────────────────────

/// One page of balance transactions plus the cursors to move from it.
///
/// An empty page carries no list and no cursors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceTransactionView {
    /// Provider list object, newest first
    #[schema(value_type = Object)]
    pub balance_transactions: Option<RemoteList<BalanceTransaction>>,
    /// Id of the last item: pass as `startAfter` for the next page
    #[schema(example = "txn_1NirD82eZvKYlo2CIvbtLWuY")]
    pub start_after: Option<String>,
    /// Id of the first item: pass as `endBefore` for the previous page
    pub end_after: Option<String>,
}

impl BalanceTransactionView {
    pub fn transactions(&self) -> &[BalanceTransaction] {
        self.balance_transactions
            .as_ref()
            .map(|list| list.data.as_slice())
            .unwrap_or_default()
    }
}
