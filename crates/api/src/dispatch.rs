//! Function-name dispatch.

use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info};

use tradeledger_auth::User;
use tradeledger_core::{Error, ProductId, Result};
use tradeledger_ledger::LedgerStore;
use tradeledger_registry::{ProductIndex, ProductRegistry};
use tradeledger_workflow::{ContractWorkflow, TransferKind};

/// Well-known ledger key recording the peer address written at `init`.
pub const PEER_ADDRESS_KEY: &str = "Peer_Address";

/// Argument shape of `read_id`.
#[derive(Debug, Deserialize)]
struct ProductIdArg {
    pid: ProductId,
}

/// Routes invocations to the registry and the workflow.
///
/// Queries (`read_id`, `read_all`) return raw stored bytes; mutations return
/// an empty payload on success. Every failure is a typed [`Error`]; use
/// [`error_payload`] to shape it for the wire.
pub struct Dispatcher<L: LedgerStore> {
    registry: ProductRegistry<L>,
}

impl<L: LedgerStore> Dispatcher<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            registry: ProductRegistry::new(ledger),
        }
    }

    pub fn registry(&self) -> &ProductRegistry<L> {
        &self.registry
    }

    /// Read-only entry points.
    pub fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        debug!(function, "query");
        match function {
            "read_id" => {
                let arg: ProductIdArg = serde_json::from_str(required(args, 0)?)
                    .map_err(|e| Error::invalid_argument(e.to_string()))?;
                self.registry.get_record_bytes(&arg.pid)
            }
            "read_all" => self.registry.list_all(),
            other => Err(Error::invalid_argument(format!(
                "unknown query function '{other}'"
            ))),
        }
    }

    /// Mutating entry points.
    pub fn invoke<R: Rng>(
        &self,
        function: &str,
        args: &[String],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        debug!(function, "invoke");
        match function {
            "init" => self.init(required(args, 0)?),
            "create_product" => {
                let user = decode_user(required(args, 0)?)?;
                self.registry.create(&user, rng)?;
                Ok(Vec::new())
            }
            "seller_to_buyersbank" => self.transfer(args, TransferKind::Settlement),
            "seller_to_buyer" | "buyersbank_to_buyer" => {
                self.transfer(args, TransferKind::ReassignOnly)
            }
            other => Err(Error::invalid_argument(format!(
                "unknown invoke function '{other}'"
            ))),
        }
    }

    /// One-time setup: empty index plus the peer address.
    fn init(&self, peer_address: &str) -> Result<Vec<u8>> {
        ProductIndex::default().persist(self.registry.ledger())?;
        self.registry
            .ledger()
            .put(PEER_ADDRESS_KEY, peer_address.as_bytes())?;
        info!(peer_address, "ledger initialized");
        Ok(Vec::new())
    }

    /// Transfer argument layout: caller JSON, product id, recipient JSON.
    fn transfer(&self, args: &[String], kind: TransferKind) -> Result<Vec<u8>> {
        let caller = decode_user(required(args, 0)?)?;
        let pid: ProductId = required(args, 1)?.parse()?;
        let recipient = decode_user(required(args, 2)?)?;

        let product = self.registry.get_by_id(&pid)?;
        let workflow = ContractWorkflow::new(&self.registry);
        workflow.transfer(product, &caller, &recipient, kind)?;
        Ok(Vec::new())
    }
}

fn required(args: &[String], position: usize) -> Result<&str> {
    args.get(position)
        .map(String::as_str)
        .ok_or_else(|| Error::invalid_argument(format!("missing argument {position}")))
}

fn decode_user(json: &str) -> Result<User> {
    serde_json::from_str(json).map_err(|e| Error::invalid_argument(e.to_string()))
}

/// Wire shape of a failed invocation: `{"Error":"<kind>: <message>"}`.
pub fn error_payload(err: &Error) -> Vec<u8> {
    let body = serde_json::json!({ "Error": format!("{}: {}", err.kind(), err) });
    body.to_string().into_bytes()
}
