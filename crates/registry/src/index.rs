//! Product id index.

use serde::{Deserialize, Serialize};

use tradeledger_core::{Error, ProductId, Result};
use tradeledger_ledger::LedgerStore;

/// Well-known ledger key holding the serialized index.
pub const PRODUCT_INDEX_KEY: &str = "productIds";

/// Ordered collection of every allocated product id, stored as one record.
///
/// Invariant: each indexed id has a product record in the ledger and each
/// product record's id appears here exactly once. The index is re-read and
/// re-written whole; see `ProductRegistry::create` for the non-atomicity
/// this implies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIndex {
    #[serde(rename = "productIds", default)]
    product_ids: Vec<ProductId>,
}

impl ProductIndex {
    /// Read the index from the ledger.
    ///
    /// An absent or empty record decodes to an empty index (the state before
    /// `init` has run). A failed read is `IndexUnavailable`; undecodable
    /// bytes are `CorruptRecord`.
    pub fn load<L: LedgerStore>(ledger: &L) -> Result<Self> {
        let bytes = ledger
            .get(PRODUCT_INDEX_KEY)
            .map_err(|e| Error::index_unavailable(e.to_string()))?;
        match bytes {
            None => Ok(Self::default()),
            Some(bytes) if bytes.is_empty() => Ok(Self::default()),
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| Error::corrupt_record(PRODUCT_INDEX_KEY, e.to_string())),
        }
    }

    /// Write the index back to its well-known key.
    pub fn persist<L: LedgerStore>(&self, ledger: &L) -> Result<()> {
        let bytes =
            serde_json::to_vec(self).map_err(|e| Error::store(e.to_string()))?;
        ledger.put(PRODUCT_INDEX_KEY, &bytes)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.product_ids.iter().any(|known| known == id)
    }

    /// Append a newly allocated id, preserving uniqueness.
    pub fn append(&mut self, id: ProductId) -> Result<()> {
        if self.contains(&id) {
            return Err(Error::duplicate_id(id.as_str()));
        }
        self.product_ids.push(id);
        Ok(())
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.product_ids
    }

    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}
