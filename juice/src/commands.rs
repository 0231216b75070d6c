//! Subcommand handlers. Every invocation is a fresh process, so commands
//! that need a session perform their own login.

use intmax::{
    build_deposit_request, build_transfer_request, resolve_token, to_display_units, TokenBalance,
    TokenInfo, WalletSession,
};
use tracing::info;

use crate::cli::{DepositArgs, TransferArgs, VerifyArgs};
use crate::error::JuiceError;

/// Connect the wallet, print the receiving address and current balances.
pub async fn connect(session: &WalletSession) -> Result<(), JuiceError> {
    let state = session.login().await?;
    println!(
        "connected: {}",
        state.address.as_deref().unwrap_or("<no address>")
    );

    let tokens = session.list_tokens().await?;
    let balances = session.token_balances().await?;
    print_balances(&balances, &tokens);
    Ok(())
}

/// Print the supported token list.
pub async fn tokens(session: &WalletSession) -> Result<(), JuiceError> {
    let tokens = session.list_tokens().await?;
    for token in &tokens {
        let decimals = token
            .decimals
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".into());
        let index = token
            .token_index
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<8} decimals={:<3} index={:<3} {}",
            token.symbol,
            decimals,
            index,
            token.contract_address.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

/// Log in and print balances in display units.
pub async fn balance(session: &WalletSession) -> Result<(), JuiceError> {
    session.login().await?;
    let tokens = session.list_tokens().await?;
    let balances = session.token_balances().await?;
    print_balances(&balances, &tokens);
    Ok(())
}

/// Deposit into an INTMAX wallet; the destination defaults to our own address.
pub async fn deposit(session: &WalletSession, args: DepositArgs) -> Result<(), JuiceError> {
    session.login().await?;

    let destination = match args.to {
        Some(to) => to,
        None => session.address().ok_or(JuiceError::NoAddress)?,
    };

    let tokens = session.list_tokens().await?;
    let token = resolve_token(&tokens, &args.token)?;
    let request = build_deposit_request(&args.amount, &token, &destination)?;

    info!(amount = %args.amount, token = %token.symbol, %destination, "submitting deposit");
    let result = session.submit_deposit(&request).await?;
    println!("deposit {}: tx {}", result.status, result.tx_hash);
    Ok(())
}

/// Send a donation to another INTMAX address.
pub async fn transfer(session: &WalletSession, args: TransferArgs) -> Result<(), JuiceError> {
    session.login().await?;

    let tokens = session.list_tokens().await?;
    let token = resolve_token(&tokens, &args.token)?;
    let request = build_transfer_request(&args.amount, &token, &args.to)?;

    info!(amount = %args.amount, token = %token.symbol, recipient = %args.to, "submitting transfer");
    let result = session.submit_transfer(&request).await?;
    println!("transfer {}: tx {}", result.status, result.tx_hash);
    Ok(())
}

/// Sign a message and check that the signature verifies.
pub async fn verify(session: &WalletSession, args: VerifyArgs) -> Result<(), JuiceError> {
    session.login().await?;
    let ok = session.sign_and_verify(&args.message).await?;
    println!("signature valid: {ok}");
    Ok(())
}

/// Render balances in display units, falling back to raw minor units when a
/// token's precision is unknown.
fn print_balances(balances: &[TokenBalance], tokens: &[TokenInfo]) {
    if balances.is_empty() {
        println!("no balances yet");
        return;
    }
    for bal in balances {
        let symbol = bal.symbol.as_deref().unwrap_or("?");
        let decimals = tokens
            .iter()
            .find(|t| Some(t.symbol.as_str()) == bal.symbol.as_deref())
            .and_then(|t| t.decimals.as_ref())
            .and_then(|d| d.as_u64());
        let display = decimals
            .and_then(|d| to_display_units(bal.amount, d as u32))
            .map(|d| d.to_string())
            .unwrap_or_else(|| format!("{} (minor units)", bal.amount));
        println!("{symbol:<8} {display}");
    }
}
