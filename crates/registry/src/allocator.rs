//! Collision-free id allocation.

use rand::Rng;

use tradeledger_core::{ProductId, Result};
use tradeledger_ledger::LedgerStore;

use crate::index::ProductIndex;

/// Lower bound of the 9-digit id space (inclusive).
pub const ID_LOW: u64 = 100_000_000;
/// Upper bound of the 9-digit id space (exclusive).
pub const ID_HIGH: u64 = 999_999_999;

/// Draws random 9-digit ids until one is not present in the index.
///
/// The id space is large relative to any realistic index, so optimistic
/// retry is cheaper than coordinating a counter across a ledger with no
/// compare-and-swap. Retries happen only on a collision: a failed index
/// read surfaces immediately as `IndexUnavailable`.
pub struct IdAllocator;

impl IdAllocator {
    /// Allocate against the index currently persisted in the ledger.
    pub fn allocate<L, R>(ledger: &L, rng: &mut R) -> Result<ProductId>
    where
        L: LedgerStore,
        R: Rng,
    {
        let index = ProductIndex::load(ledger)?;
        Self::allocate_in(&index, rng)
    }

    /// Allocate against an index snapshot the caller already holds.
    pub fn allocate_in<R: Rng>(index: &ProductIndex, rng: &mut R) -> Result<ProductId> {
        loop {
            let candidate = ProductId::new(rng.gen_range(ID_LOW..ID_HIGH).to_string())?;
            if !index.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(id = %candidate, "allocator collision, redrawing");
        }
    }
}
