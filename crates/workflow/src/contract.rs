//! Sales contract value.

use serde::{Deserialize, Serialize};

use tradeledger_core::LifecycleState;

/// A sales contract over one product for the duration of a trade.
///
/// Party fields are identity references, not ownership. The association
/// with a product is by invocation context; no back-reference is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub seller: String,
    pub buyer: String,
    #[serde(rename = "sellerbank")]
    pub seller_bank: String,
    #[serde(rename = "buyerbank")]
    pub buyer_bank: String,
    #[serde(default)]
    pub price: f32,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub route: String,
    pub state: LifecycleState,
}

impl Contract {
    /// A contract at the start of negotiation.
    pub fn draft(
        seller: impl Into<String>,
        buyer: impl Into<String>,
        seller_bank: impl Into<String>,
        buyer_bank: impl Into<String>,
    ) -> Self {
        Self {
            seller: seller.into(),
            buyer: buyer.into(),
            seller_bank: seller_bank.into(),
            buyer_bank: buyer_bank.into(),
            price: 0.0,
            currency: String::new(),
            origin: String::new(),
            destination: String::new(),
            route: String::new(),
            state: LifecycleState::Init,
        }
    }
}
