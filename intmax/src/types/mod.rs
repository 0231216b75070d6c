mod deposit;
mod enums;
mod token;
mod transfer;
mod wallet;

pub use deposit::{DepositRequest, DepositResult};
pub use enums::TxStatus;
pub use token::{Token, TokenBalance, TokenInfo};
pub use transfer::{TransferRequest, TransferResult};
pub use wallet::{LoginResponse, NetworkInfo, SignResponse, VerifyResponse};

/// Transport u128 amounts as decimal strings; 2^128 exceeds the integer
/// range JSON consumers handle reliably.
pub(crate) mod u128_str {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<u128>().map_err(serde::de::Error::custom)
    }
}
