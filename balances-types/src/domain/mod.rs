//! Provider records exposed by the balances proxy.

pub mod balance;
pub mod list;
pub mod transaction;

pub use balance::{Balance, BalanceAmount};
pub use list::RemoteList;
pub use transaction::{BalanceTransaction, TransactionId};
