//! `tradeledger-ledger` — capability interface over the host key-value ledger.
//!
//! All persistence in the workspace goes through [`LedgerStore`]; nothing
//! below it implements storage itself. The in-memory adapter backs tests and
//! development, production adapters are supplied by the hosting runtime.

pub mod memory;
pub mod store;

pub use memory::InMemoryLedger;
pub use store::LedgerStore;
