//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not on a concrete
//! provider client.

mod gateway;

pub use gateway::BalanceGateway;
