//! `tradeledger-core` — shared domain foundation.
//!
//! Error model, product identifiers and the trade lifecycle state shared by
//! the registry and the contract workflow. No storage or transport concerns.

pub mod error;
pub mod id;
pub mod state;

pub use error::{Error, Result};
pub use id::ProductId;
pub use state::LifecycleState;
