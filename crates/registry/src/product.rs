//! Persisted product record.

use serde::{Deserialize, Serialize};

use tradeledger_auth::User;
use tradeledger_core::{LifecycleState, ProductId};

/// A product passport as stored in the ledger, keyed by its `pid`.
///
/// The record is replaced whole on every save; there is no partial update
/// and no delete. `pid` never changes once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub pid: ProductId,
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub manufacturer: String,
    pub owner: User,
    #[serde(default)]
    pub current_location: String,
    pub state: LifecycleState,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub weight: f32,
}

impl Product {
    /// A freshly registered product: owned and manufactured by its creator,
    /// lifecycle at `Init`.
    pub fn new(pid: ProductId, owner: User) -> Self {
        Self {
            pid,
            checksum: String::new(),
            manufacturer: owner.name.clone(),
            owner,
            current_location: String::new(),
            state: LifecycleState::Init,
            width: 0.0,
            height: 0.0,
            weight: 0.0,
        }
    }
}
