//! Authorization predicate.

use tradeledger_core::{Error, Result};

use crate::{Role, User};

/// Flat allow/deny check: does the caller hold the required role?
///
/// - No IO
/// - No panics
/// - No hierarchy, delegation or expiry
pub fn authorize(caller: &User, required: Role) -> bool {
    caller.role == required
}

/// `authorize` lifted into the error model, for use at mutation boundaries.
pub fn require_role(caller: &User, required: Role) -> Result<()> {
    if authorize(caller, required) {
        Ok(())
    } else {
        Err(Error::permission_denied(format!(
            "caller '{}' must hold role {required}",
            caller.name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_exact_role_match_only() {
        let seller = User::new(Role::Seller, "Acme");
        assert!(authorize(&seller, Role::Seller));
        assert!(!authorize(&seller, Role::Buyer));
        assert!(!authorize(&seller, Role::Government));
    }

    #[test]
    fn require_role_maps_denial_to_permission_denied() {
        let shipper = User::new(Role::Shipper, "Move-It");
        assert!(require_role(&shipper, Role::Shipper).is_ok());
        let err = require_role(&shipper, Role::Seller).unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");
    }
}
