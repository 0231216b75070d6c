use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Token entry as advertised by the wallet service.
///
/// Everything beyond `symbol` is optional on the wire; use
/// [`crate::utils::resolve_token`] to turn an entry into a validated [`Token`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub symbol: String,
    pub token_index: Option<u32>,
    pub decimals: Option<serde_json::Number>,
    pub contract_address: Option<String>,
}

/// Token descriptor with validated precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub decimals: u32,
    pub token_index: Option<u32>,
    pub contract_address: Option<String>,
}

/// Balance of one token for the active session, in minor units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub symbol: Option<String>,
    pub token_index: Option<u32>,
    /// Minor units, transported as a decimal string.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}
