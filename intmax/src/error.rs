use std::time::Duration;

use thiserror::Error;

/// Transport- and protocol-level failures from the wallet service.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias for the raw client layer.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Failures surfaced by the wallet-session facade.
///
/// Every facade operation fails with exactly one of these kinds; transport
/// and decode errors never escape this layer undressed.
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("initialization failed: {0}")]
    Initialization(String),

    #[error("login failed: {0}")]
    Login(String),

    #[error("token list unavailable: {0}")]
    TokenList(String),

    #[error("token not found: {0}")]
    TokenNotFound(String),

    #[error("invalid token {symbol}: {reason}")]
    InvalidToken { symbol: String, reason: String },

    #[error("invalid amount {text:?}: {reason}")]
    InvalidAmount { text: String, reason: String },

    #[error("destination address is empty")]
    MissingDestination,

    #[error("deposit submission failed: {0}")]
    DepositSubmission(String),

    #[error("transfer submission failed: {0}")]
    TransferSubmission(String),

    #[error("balance query failed: {0}")]
    BalanceQuery(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("signature verification failed: {0}")]
    Verification(String),

    #[error("{op} timed out after {timeout:?}")]
    Timeout { op: &'static str, timeout: Duration },
}

pub type Result<T> = std::result::Result<T, WalletError>;
