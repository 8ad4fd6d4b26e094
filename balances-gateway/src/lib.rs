//! # Balances Gateway
//!
//! Concrete provider adapter for the balances proxy. `StripeGateway` speaks
//! the provider's REST API over reqwest and implements the `BalanceGateway`
//! port.

mod config;
mod retry;
mod stripe;

pub use config::StripeConfig;
pub use stripe::StripeGateway;
