//! In-memory ledger adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use tradeledger_core::{Error, Result};

use crate::store::LedgerStore;

/// In-memory key-value ledger.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    cells: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let cells = self
            .cells
            .read()
            .map_err(|_| Error::store("lock poisoned"))?;
        Ok(cells.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut cells = self
            .cells
            .write()
            .map_err(|_| Error::store("lock poisoned"))?;
        cells.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
