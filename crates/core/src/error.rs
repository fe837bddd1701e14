//! Domain error model.

use thiserror::Error;

/// Result type used across the workspace.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure of a ledger-backed operation.
///
/// Every component returns these as typed values to its immediate caller;
/// nothing in the core panics on a failed precondition. `Store` is the one
/// infrastructure kind: a ledger read/write fault outside the index path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is absent from the ledger.
    #[error("no record for key '{0}'")]
    NotFound(String),

    /// Stored bytes failed to deserialize into a well-formed record.
    #[error("corrupt record at '{key}': {detail}")]
    CorruptRecord { key: String, detail: String },

    /// An identifier is already present in the product index.
    #[error("duplicate product id '{0}'")]
    DuplicateId(String),

    /// A role, ownership or state precondition failed.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// An input failed to decode or validate.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The product index could not be read.
    #[error("product index unavailable: {0}")]
    IndexUnavailable(String),

    /// A ledger read or write failed.
    #[error("ledger store error: {0}")]
    Store(String),
}

impl Error {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn corrupt_record(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::CorruptRecord {
            key: key.into(),
            detail: detail.into(),
        }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn index_unavailable(msg: impl Into<String>) -> Self {
        Self::IndexUnavailable(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Stable kind tag used in error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "NotFound",
            Error::CorruptRecord { .. } => "CorruptRecord",
            Error::DuplicateId(_) => "DuplicateId",
            Error::PermissionDenied(_) => "PermissionDenied",
            Error::InvalidArgument(_) => "InvalidArgument",
            Error::IndexUnavailable(_) => "IndexUnavailable",
            Error::Store(_) => "Store",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_stable() {
        assert_eq!(Error::not_found("k").kind(), "NotFound");
        assert_eq!(Error::corrupt_record("k", "bad json").kind(), "CorruptRecord");
        assert_eq!(Error::duplicate_id("123").kind(), "DuplicateId");
        assert_eq!(Error::permission_denied("nope").kind(), "PermissionDenied");
        assert_eq!(Error::invalid_argument("bad").kind(), "InvalidArgument");
        assert_eq!(Error::index_unavailable("down").kind(), "IndexUnavailable");
        assert_eq!(Error::store("io").kind(), "Store");
    }

    #[test]
    fn display_includes_context() {
        let err = Error::corrupt_record("productIds", "unexpected end of input");
        let msg = err.to_string();
        assert!(msg.contains("productIds"));
        assert!(msg.contains("unexpected end of input"));
    }
}
