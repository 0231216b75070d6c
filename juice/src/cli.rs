use clap::{Parser, Subcommand};

/// juice — buy me a cup of juice over the INTMAX privacy network.
#[derive(Parser, Debug)]
#[command(name = "juice", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Wallet network (testnet, mainnet); defaults to $INTMAX_ENV, then testnet
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Wallet service URL override; defaults to $INTMAX_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect the wallet and show the receiving address and balances
    Connect,

    /// List tokens supported by the wallet service
    Tokens,

    /// Show token balances for the connected wallet
    Balance,

    /// Deposit into an INTMAX wallet (your own by default)
    Deposit(DepositArgs),

    /// Send a donation to another INTMAX address
    Transfer(TransferArgs),

    /// Sign a message and check the signature round-trips
    Verify(VerifyArgs),
}

/// Arguments for the `deposit` subcommand.
#[derive(Parser, Debug)]
pub struct DepositArgs {
    /// Amount in display units (e.g. 1.5)
    pub amount: String,

    /// Token symbol
    #[arg(long, default_value = "ETH")]
    pub token: String,

    /// Destination address; defaults to the connected wallet's own address
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the `transfer` subcommand.
#[derive(Parser, Debug)]
pub struct TransferArgs {
    /// Amount in display units (e.g. 0.25)
    pub amount: String,

    /// Recipient INTMAX address
    #[arg(long)]
    pub to: String,

    /// Token symbol
    #[arg(long, default_value = "ETH")]
    pub token: String,
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Message to sign and verify
    #[arg(long, default_value = "Hello, World!")]
    pub message: String,
}
