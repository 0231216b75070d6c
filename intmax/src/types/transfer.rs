use serde::{Deserialize, Serialize};

use super::enums::TxStatus;
use super::token::Token;

/// Transfer submission payload; see [`crate::utils::build_transfer_request`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Amount in minor units.
    #[serde(rename = "amount", with = "super::u128_str")]
    pub amount_minor_units: u128,
    pub token: Token,
    #[serde(rename = "recipient")]
    pub recipient_address: String,
}

/// Receipt for a submitted transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    pub tx_hash: String,
    pub status: TxStatus,
}
