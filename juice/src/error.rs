use thiserror::Error;

#[derive(Debug, Error)]
pub enum JuiceError {
    #[error(transparent)]
    Wallet(#[from] intmax::WalletError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("wallet session has no address")]
    NoAddress,
}
