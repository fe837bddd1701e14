//! `tradeledger-registry` — product records, the id index and the registry.
//!
//! Owns the Product entity end to end: id allocation against the persisted
//! index, record creation, point lookup, whole-record save and index
//! maintenance. All writes go through the [`LedgerStore`] capability.
//!
//! [`LedgerStore`]: tradeledger_ledger::LedgerStore

pub mod allocator;
pub mod index;
pub mod product;
pub mod registry;

pub use allocator::IdAllocator;
pub use index::{ProductIndex, PRODUCT_INDEX_KEY};
pub use product::Product;
pub use registry::ProductRegistry;
