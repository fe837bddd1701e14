//! Participant roles.

use serde::{Deserialize, Serialize};

use tradeledger_core::Error;

/// Participant role in the trade workflow.
///
/// The wire encoding is the legacy numeric string (`"1"`–`"7"`) carried in
/// every `User` value. The enum is closed: an unrecognized value fails at
/// decode time rather than at comparison time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "1")]
    Government,
    #[serde(rename = "2")]
    Seller,
    #[serde(rename = "3")]
    Buyer,
    #[serde(rename = "4")]
    SellerBank,
    #[serde(rename = "5")]
    BuyerBank,
    #[serde(rename = "6")]
    Shipper,
    #[serde(rename = "7")]
    Machine,
}

impl Role {
    pub fn as_wire(self) -> &'static str {
        match self {
            Role::Government => "1",
            Role::Seller => "2",
            Role::Buyer => "3",
            Role::SellerBank => "4",
            Role::BuyerBank => "5",
            Role::Shipper => "6",
            Role::Machine => "7",
        }
    }

    pub fn from_wire(s: &str) -> Result<Self, Error> {
        match s {
            "1" => Ok(Role::Government),
            "2" => Ok(Role::Seller),
            "3" => Ok(Role::Buyer),
            "4" => Ok(Role::SellerBank),
            "5" => Ok(Role::BuyerBank),
            "6" => Ok(Role::Shipper),
            "7" => Ok(Role::Machine),
            other => Err(Error::invalid_argument(format!("unknown role '{other}'"))),
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Role::Government => "GOVERNMENT",
            Role::Seller => "SELLER",
            Role::Buyer => "BUYER",
            Role::SellerBank => "SELLER_BANK",
            Role::BuyerBank => "BUYER_BANK",
            Role::Shipper => "SHIPPER",
            Role::Machine => "MACHINE",
        };
        f.write_str(name)
    }
}
