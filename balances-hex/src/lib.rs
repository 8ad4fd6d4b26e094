//! # Balances Hex
//!
//! Application service layer and HTTP adapter for the balances proxy.
//!
//! ## Architecture
//!
//! - `service/` - `BalanceAccessFacade`, the paging translation layer
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The facade is generic over `G: BalanceGateway`, so the Stripe client or a
//! test double can be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::BalanceAccessFacade;
