//! Caller identity.

use serde::{Deserialize, Serialize};

use crate::Role;

/// Identity supplied with each invocation.
///
/// Users are immutable per-invocation values, never persisted standalone;
/// the only stored copy is the one embedded as a product's `owner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub role: Role,
    pub name: String,
    /// Acknowledgement flag used during negotiation. Not part of identity.
    #[serde(default)]
    pub okflag: bool,
}

impl User {
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
            okflag: false,
        }
    }

    /// Identity comparison for ownership checks: role and name, not `okflag`.
    pub fn is_same_party(&self, other: &User) -> bool {
        self.role == other.role && self.name == other.name
    }
}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}
