//! Product registry.

use rand::Rng;
use tracing::{info, warn};

use tradeledger_auth::{require_role, Role, User};
use tradeledger_core::{Error, ProductId, Result};
use tradeledger_ledger::LedgerStore;

use crate::allocator::IdAllocator;
use crate::index::{ProductIndex, PRODUCT_INDEX_KEY};
use crate::product::Product;

/// Owns product creation, lookup, save and index maintenance.
///
/// Each invocation runs to completion before the next touches the same keys
/// (host guarantee), so the registry holds no locks of its own. The record
/// write and the index write are still two separate `put`s: a failure
/// between them can leave an orphaned record, and two racing creates can
/// lose an index append. Neither can be fixed without multi-key atomicity
/// from the host.
pub struct ProductRegistry<L: LedgerStore> {
    ledger: L,
}

impl<L: LedgerStore> ProductRegistry<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Register a new product owned by `owner`.
    ///
    /// Only a SELLER may create products; anyone else gets
    /// `PermissionDenied` and nothing is written. The index is loaded once,
    /// before any write, so an unreadable index fails the invocation while
    /// the ledger is still untouched.
    pub fn create<R: Rng>(&self, owner: &User, rng: &mut R) -> Result<Product> {
        require_role(owner, Role::Seller)?;

        let mut index = ProductIndex::load(&self.ledger)?;
        let pid = IdAllocator::allocate_in(&index, rng)?;
        let product = Product::new(pid.clone(), owner.clone());

        self.save(&product)?;

        index.append(pid.clone())?;
        if let Err(e) = index.persist(&self.ledger) {
            // The record put already landed; this create leaves an orphan.
            warn!(pid = %pid, error = %e, "index write failed after record write");
            return Err(e);
        }

        info!(pid = %pid, owner = %owner.name, "product registered");
        Ok(product)
    }

    /// Point lookup by id.
    pub fn get_by_id(&self, id: &ProductId) -> Result<Product> {
        let bytes = self
            .ledger
            .get(id.as_str())?
            .ok_or_else(|| Error::not_found(id.as_str()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::corrupt_record(id.as_str(), e.to_string()))
    }

    /// Raw bytes of the stored record, without decoding.
    pub fn get_record_bytes(&self, id: &ProductId) -> Result<Vec<u8>> {
        self.ledger
            .get(id.as_str())?
            .ok_or_else(|| Error::not_found(id.as_str()))
    }

    /// The index record verbatim.
    ///
    /// Read contract: callers of "read all" get the serialized index, not
    /// hydrated product records.
    pub fn list_all(&self) -> Result<Vec<u8>> {
        self.ledger
            .get(PRODUCT_INDEX_KEY)
            .map_err(|e| Error::index_unavailable(e.to_string()))?
            .ok_or_else(|| Error::not_found(PRODUCT_INDEX_KEY))
    }

    /// Whole-record overwrite keyed by the product's id. Last writer wins.
    pub fn save(&self, product: &Product) -> Result<()> {
        let bytes =
            serde_json::to_vec(product).map_err(|e| Error::store(e.to_string()))?;
        self.ledger.put(product.pid.as_str(), &bytes)
    }
}
