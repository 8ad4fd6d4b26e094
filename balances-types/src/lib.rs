//! # Balances Types
//!
//! Domain records and port traits for the balances proxy service.
//! This crate has no IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Provider records (Balance, BalanceTransaction, RemoteList)
//! - `ports/` - The gateway trait that provider adapters implement
//! - `dto/` - Paging parameters, the provider query and the client view
//! - `error/` - Gateway and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Balance, BalanceAmount, BalanceTransaction, RemoteList, TransactionId};
pub use dto::*;
pub use error::{AppError, FieldError, GatewayError};
pub use ports::BalanceGateway;
