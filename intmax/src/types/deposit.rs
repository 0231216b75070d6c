use serde::{Deserialize, Serialize};

use super::enums::TxStatus;
use super::token::Token;

/// Deposit submission payload.
///
/// Built by [`crate::utils::build_deposit_request`], which guarantees a
/// positive amount and a non-empty destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    /// Amount in minor units.
    #[serde(rename = "amount", with = "super::u128_str")]
    pub amount_minor_units: u128,
    pub token: Token,
    /// Receiving wallet address.
    #[serde(rename = "recipient")]
    pub destination_address: String,
}

/// Receipt for a submitted deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResult {
    pub tx_hash: String,
    pub status: TxStatus,
}
