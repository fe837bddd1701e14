//! Trade lifecycle state.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Stage of a trade, shared by products and contracts.
///
/// The wire encoding is the numeric string `"0"`–`"9"` used by the persisted
/// records. The derived `Ord` follows the fixed negotiation order; contract
/// state only ever moves forward along it, and `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    #[serde(rename = "0")]
    Init,
    #[serde(rename = "1")]
    Created,
    #[serde(rename = "2")]
    BuyerBankOk,
    #[serde(rename = "3")]
    SellerBankOk,
    #[serde(rename = "4")]
    RouteSet,
    #[serde(rename = "5")]
    BeingShipped,
    #[serde(rename = "6")]
    Arrived,
    #[serde(rename = "7")]
    LocationOk,
    #[serde(rename = "8")]
    PaymentOk,
    #[serde(rename = "9")]
    Ended,
}

impl LifecycleState {
    /// Numeric-string form stored in the ledger.
    pub fn as_wire(self) -> &'static str {
        match self {
            LifecycleState::Init => "0",
            LifecycleState::Created => "1",
            LifecycleState::BuyerBankOk => "2",
            LifecycleState::SellerBankOk => "3",
            LifecycleState::RouteSet => "4",
            LifecycleState::BeingShipped => "5",
            LifecycleState::Arrived => "6",
            LifecycleState::LocationOk => "7",
            LifecycleState::PaymentOk => "8",
            LifecycleState::Ended => "9",
        }
    }

    pub fn from_wire(s: &str) -> Result<Self, Error> {
        match s {
            "0" => Ok(LifecycleState::Init),
            "1" => Ok(LifecycleState::Created),
            "2" => Ok(LifecycleState::BuyerBankOk),
            "3" => Ok(LifecycleState::SellerBankOk),
            "4" => Ok(LifecycleState::RouteSet),
            "5" => Ok(LifecycleState::BeingShipped),
            "6" => Ok(LifecycleState::Arrived),
            "7" => Ok(LifecycleState::LocationOk),
            "8" => Ok(LifecycleState::PaymentOk),
            "9" => Ok(LifecycleState::Ended),
            other => Err(Error::invalid_argument(format!(
                "unknown lifecycle state '{other}'"
            ))),
        }
    }

    /// The immediate successor, or `None` at `Ended`.
    pub fn next(self) -> Option<Self> {
        match self {
            LifecycleState::Init => Some(LifecycleState::Created),
            LifecycleState::Created => Some(LifecycleState::BuyerBankOk),
            LifecycleState::BuyerBankOk => Some(LifecycleState::SellerBankOk),
            LifecycleState::SellerBankOk => Some(LifecycleState::RouteSet),
            LifecycleState::RouteSet => Some(LifecycleState::BeingShipped),
            LifecycleState::BeingShipped => Some(LifecycleState::Arrived),
            LifecycleState::Arrived => Some(LifecycleState::LocationOk),
            LifecycleState::LocationOk => Some(LifecycleState::PaymentOk),
            LifecycleState::PaymentOk => Some(LifecycleState::Ended),
            LifecycleState::Ended => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == LifecycleState::Ended
    }
}

impl core::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            LifecycleState::Init => "Init",
            LifecycleState::Created => "Created",
            LifecycleState::BuyerBankOk => "BuyerBankOk",
            LifecycleState::SellerBankOk => "SellerBankOk",
            LifecycleState::RouteSet => "RouteSet",
            LifecycleState::BeingShipped => "BeingShipped",
            LifecycleState::Arrived => "Arrived",
            LifecycleState::LocationOk => "LocationOk",
            LifecycleState::PaymentOk => "PaymentOk",
            LifecycleState::Ended => "Ended",
        };
        f.write_str(name)
    }
}
