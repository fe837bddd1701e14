//! `tradeledger-workflow` — contract negotiation and ownership transfer.
//!
//! A contract advances one checkpoint at a time along the fixed negotiation
//! order; the early checkpoints gate on acknowledgements the caller must
//! supply. Ownership transfer is a single authorized operation, optionally
//! carrying the lifecycle bump that settlement implies.

pub mod contract;
pub mod workflow;

pub use contract::Contract;
pub use workflow::{Acknowledgements, ContractWorkflow, NoAcknowledgements, TransferKind};
