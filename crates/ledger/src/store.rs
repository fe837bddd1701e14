//! Ledger capability trait.

use std::sync::Arc;

use tradeledger_core::Result;

/// Point read/write of a byte value by string key.
///
/// Both operations are synchronous and atomic per key, but **not** atomic
/// across keys: a caller that must keep two records consistent (the product
/// record and the index) sequences two separate `put`s and accepts the
/// resulting window. The host serializes invocations, so implementations
/// need no ordering guarantees beyond per-key atomicity.
///
/// `get` distinguishes "key absent" (`Ok(None)`) from a failed read
/// (`Err(Store)`); callers decide whether absence is an error.
pub trait LedgerStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    fn put(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<S> LedgerStore for Arc<S>
where
    S: LedgerStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }
}
