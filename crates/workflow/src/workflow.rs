//! Contract state machine and ownership transfer.

use tracing::info;

use tradeledger_auth::{authorize, Role, User};
use tradeledger_core::{Error, LifecycleState, Result};
use tradeledger_ledger::LedgerStore;
use tradeledger_registry::{Product, ProductRegistry};

use crate::contract::Contract;

/// Acknowledgement signals the negotiation checkpoints gate on.
///
/// The workflow never decides agreement itself; whoever hosts an invocation
/// supplies this capability (an approvals service, collected signatures,
/// a test double). Each method answers for the contract as it stands.
pub trait Acknowledgements {
    /// Buyer and seller have both agreed to the terms.
    fn terms_agreed(&self, contract: &Contract) -> bool;

    /// The buyer's bank has checked the contract and issued its approval.
    fn buyer_bank_approved(&self, contract: &Contract) -> bool;

    /// The seller's bank has checked the contract and the letter of credit.
    fn seller_bank_approved(&self, contract: &Contract) -> bool;
}

/// Denies every acknowledgement. Useful as a safe default and in tests.
pub struct NoAcknowledgements;

impl Acknowledgements for NoAcknowledgements {
    fn terms_agreed(&self, _contract: &Contract) -> bool {
        false
    }
    fn buyer_bank_approved(&self, _contract: &Contract) -> bool {
        false
    }
    fn seller_bank_approved(&self, _contract: &Contract) -> bool {
        false
    }
}

/// What an ownership transfer does besides reassigning the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// Settlement hand-off to the buyer's bank: requires the product to have
    /// arrived and bumps its lifecycle to `BuyerBankOk`.
    Settlement,
    /// Reassign ownership only; the lifecycle state is left untouched.
    ReassignOnly,
}

/// Advances contracts through negotiation and authorizes ownership hand-offs.
pub struct ContractWorkflow<'a, L: LedgerStore> {
    registry: &'a ProductRegistry<L>,
}

impl<'a, L: LedgerStore> ContractWorkflow<'a, L> {
    pub fn new(registry: &'a ProductRegistry<L>) -> Self {
        Self { registry }
    }

    /// Step the contract to its immediate successor state.
    ///
    /// No skipping, no going back; `Ended` is terminal. The first three
    /// transitions require the matching acknowledgement; the later ones are
    /// triggered by the host as the shipment progresses. On any refusal the
    /// contract is unchanged.
    pub fn advance(
        &self,
        contract: &mut Contract,
        acks: &dyn Acknowledgements,
    ) -> Result<LifecycleState> {
        let Some(next) = contract.state.next() else {
            return Err(Error::permission_denied("contract has already ended"));
        };

        let allowed = match contract.state {
            LifecycleState::Init => acks.terms_agreed(contract),
            LifecycleState::Created => acks.buyer_bank_approved(contract),
            LifecycleState::BuyerBankOk => acks.seller_bank_approved(contract),
            _ => true,
        };
        if !allowed {
            return Err(Error::permission_denied(format!(
                "missing acknowledgement for transition {} -> {next}",
                contract.state
            )));
        }

        info!(from = %contract.state, to = %next, "contract advanced");
        contract.state = next;
        Ok(next)
    }

    /// Reassign product ownership from `caller` to `recipient`.
    ///
    /// Both kinds require the caller to be the current owner and a SELLER.
    /// `Settlement` additionally requires the product to be at `Arrived` and
    /// the recipient to be the BUYER_BANK, and moves the product to
    /// `BuyerBankOk`. Any violated condition is `PermissionDenied`; the
    /// stored record is only touched on success.
    pub fn transfer(
        &self,
        mut product: Product,
        caller: &User,
        recipient: &User,
        kind: TransferKind,
    ) -> Result<Product> {
        if !product.owner.is_same_party(caller) {
            return Err(Error::permission_denied("caller does not own this product"));
        }
        if !authorize(caller, Role::Seller) {
            return Err(Error::permission_denied("only SELLER may transfer ownership"));
        }

        match kind {
            TransferKind::Settlement => {
                if product.state != LifecycleState::Arrived {
                    return Err(Error::permission_denied(format!(
                        "product must be Arrived to settle, found {}",
                        product.state
                    )));
                }
                if !authorize(recipient, Role::BuyerBank) {
                    return Err(Error::permission_denied(
                        "settlement recipient must be the BUYER_BANK",
                    ));
                }
                product.owner = recipient.clone();
                product.state = LifecycleState::BuyerBankOk;
            }
            TransferKind::ReassignOnly => {
                product.owner = recipient.clone();
            }
        }

        self.registry.save(&product)?;
        info!(pid = %product.pid, to = %recipient.name, ?kind, "ownership transferred");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tradeledger_ledger::InMemoryLedger;
    use tradeledger_registry::ProductIndex;

    struct FixedAcks {
        terms: bool,
        buyer_bank: bool,
        seller_bank: bool,
    }

    impl Acknowledgements for FixedAcks {
        fn terms_agreed(&self, _c: &Contract) -> bool {
            self.terms
        }
        fn buyer_bank_approved(&self, _c: &Contract) -> bool {
            self.buyer_bank
        }
        fn seller_bank_approved(&self, _c: &Contract) -> bool {
            self.seller_bank
        }
    }

    const ALL_ACKS: FixedAcks = FixedAcks {
        terms: true,
        buyer_bank: true,
        seller_bank: true,
    };

    fn seller() -> User {
        User::new(Role::Seller, "Acme")
    }

    fn buyer_bank() -> User {
        User::new(Role::BuyerBank, "B-Bank")
    }

    fn contract() -> Contract {
        Contract::draft("Acme", "Big Corp", "S-Bank", "B-Bank")
    }

    fn setup() -> (ProductRegistry<InMemoryLedger>, Product) {
        let registry = ProductRegistry::new(InMemoryLedger::new());
        ProductIndex::default().persist(registry.ledger()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let product = registry.create(&seller(), &mut rng).unwrap();
        (registry, product)
    }

    #[test]
    fn advance_requires_terms_agreement_out_of_init() {
        let (registry, _) = setup();
        let workflow = ContractWorkflow::new(&registry);
        let mut contract = contract();

        let err = workflow
            .advance(&mut contract, &NoAcknowledgements)
            .unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");
        assert_eq!(contract.state, LifecycleState::Init);

        let next = workflow.advance(&mut contract, &ALL_ACKS).unwrap();
        assert_eq!(next, LifecycleState::Created);
    }

    #[test]
    fn bank_checkpoints_gate_on_their_own_acknowledgements() {
        let (registry, _) = setup();
        let workflow = ContractWorkflow::new(&registry);
        let mut contract = contract();

        let only_terms = FixedAcks {
            terms: true,
            buyer_bank: false,
            seller_bank: false,
        };
        workflow.advance(&mut contract, &only_terms).unwrap();
        assert_eq!(contract.state, LifecycleState::Created);

        let err = workflow.advance(&mut contract, &only_terms).unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");
        assert_eq!(contract.state, LifecycleState::Created);

        workflow.advance(&mut contract, &ALL_ACKS).unwrap();
        assert_eq!(contract.state, LifecycleState::BuyerBankOk);
        workflow.advance(&mut contract, &ALL_ACKS).unwrap();
        assert_eq!(contract.state, LifecycleState::SellerBankOk);
    }

    #[test]
    fn later_transitions_are_host_triggered_and_ended_is_terminal() {
        let (registry, _) = setup();
        let workflow = ContractWorkflow::new(&registry);
        let mut contract = contract();
        contract.state = LifecycleState::SellerBankOk;

        // RouteSet, BeingShipped, Arrived, LocationOk, PaymentOk, Ended.
        for _ in 0..6 {
            workflow.advance(&mut contract, &NoAcknowledgements).unwrap();
        }
        assert_eq!(contract.state, LifecycleState::Ended);

        let err = workflow
            .advance(&mut contract, &ALL_ACKS)
            .unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");
        assert_eq!(contract.state, LifecycleState::Ended);
    }

    #[test]
    fn settlement_hands_the_product_to_the_buyers_bank() {
        let (registry, mut product) = setup();
        product.state = LifecycleState::Arrived;
        registry.save(&product).unwrap();

        let workflow = ContractWorkflow::new(&registry);
        let transferred = workflow
            .transfer(product.clone(), &seller(), &buyer_bank(), TransferKind::Settlement)
            .unwrap();

        assert_eq!(transferred.owner, buyer_bank());
        assert_eq!(transferred.state, LifecycleState::BuyerBankOk);

        let stored = registry.get_by_id(&transferred.pid).unwrap();
        assert_eq!(stored, transferred);
    }

    #[test]
    fn settlement_denies_each_violated_condition_without_mutation() {
        let (registry, mut product) = setup();
        product.state = LifecycleState::Arrived;
        registry.save(&product).unwrap();
        let before = registry.get_record_bytes(&product.pid).unwrap();

        let workflow = ContractWorkflow::new(&registry);

        // Wrong lifecycle state.
        let mut in_transit = product.clone();
        in_transit.state = LifecycleState::BeingShipped;
        registry.save(&in_transit).unwrap();
        let err = workflow
            .transfer(in_transit.clone(), &seller(), &buyer_bank(), TransferKind::Settlement)
            .unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");
        registry.save(&product).unwrap();

        // Caller is not the owner.
        let stranger = User::new(Role::Seller, "Impostor");
        let err = workflow
            .transfer(product.clone(), &stranger, &buyer_bank(), TransferKind::Settlement)
            .unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");

        // Caller owns it but holds the wrong role.
        let mut buyer_owned = product.clone();
        buyer_owned.owner = User::new(Role::Buyer, "Big Corp");
        let big_corp = User::new(Role::Buyer, "Big Corp");
        let err = workflow
            .transfer(buyer_owned, &big_corp, &buyer_bank(), TransferKind::Settlement)
            .unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");

        // Recipient is not the buyer's bank.
        let err = workflow
            .transfer(
                product.clone(),
                &seller(),
                &User::new(Role::Buyer, "Big Corp"),
                TransferKind::Settlement,
            )
            .unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");

        // The stored record never changed.
        let after = registry.get_record_bytes(&product.pid).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn reassign_only_skips_the_lifecycle_gate() {
        let (registry, product) = setup();
        assert_eq!(product.state, LifecycleState::Init);

        let workflow = ContractWorkflow::new(&registry);
        let recipient = User::new(Role::Buyer, "Big Corp");
        let transferred = workflow
            .transfer(product, &seller(), &recipient, TransferKind::ReassignOnly)
            .unwrap();

        assert_eq!(transferred.owner, recipient);
        assert_eq!(transferred.state, LifecycleState::Init);
    }

    #[test]
    fn reassign_only_still_requires_the_owning_seller() {
        let (registry, product) = setup();
        let workflow = ContractWorkflow::new(&registry);

        let err = workflow
            .transfer(
                product,
                &User::new(Role::Shipper, "Move-It"),
                &buyer_bank(),
                TransferKind::ReassignOnly,
            )
            .unwrap_err();
        assert_eq!(err.kind(), "PermissionDenied");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Observed contract states never decrease, whatever sequence of
            /// acknowledgement outcomes the advance calls see.
            #[test]
            fn contract_state_is_monotonic(acks in proptest::collection::vec(any::<(bool, bool, bool)>(), 1..30)) {
                let registry = ProductRegistry::new(InMemoryLedger::new());
                let workflow = ContractWorkflow::new(&registry);
                let mut contract = contract();
                let mut observed = vec![contract.state];

                for (terms, buyer_bank, seller_bank) in acks {
                    let fixed = FixedAcks { terms, buyer_bank, seller_bank };
                    let _ = workflow.advance(&mut contract, &fixed);
                    observed.push(contract.state);
                }

                for pair in observed.windows(2) {
                    prop_assert!(pair[0] <= pair[1]);
                }
            }
        }
    }
}
