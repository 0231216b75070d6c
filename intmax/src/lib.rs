pub mod client;
pub mod config;
pub mod error;
pub mod rest;
pub mod session;
pub mod types;
pub mod utils;

// ---- Top-level re-exports for ergonomic usage ----

// Client + session facade
pub use client::IntmaxClient;
pub use config::{Environment, IntmaxConfig, DEFAULT_OPERATION_TIMEOUT};
pub use error::{ClientError, ClientResult, Result, WalletError};
pub use session::{Session, WalletSession};

// REST client
pub use rest::IntmaxHttpClient;

// Wire types
pub use types::{
    DepositRequest, DepositResult, LoginResponse, NetworkInfo, SignResponse, Token, TokenBalance,
    TokenInfo, TransferRequest, TransferResult, TxStatus, VerifyResponse,
};

// Amount + token helpers
pub use utils::{
    build_deposit_request, build_transfer_request, parse_amount, resolve_token, to_display_units,
    to_minor_units, MAX_TOKEN_DECIMALS,
};
