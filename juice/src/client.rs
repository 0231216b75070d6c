//! WalletSession factory — resolves the environment and service URL, then
//! initializes the wallet client behind a session facade.

use std::sync::Arc;

use intmax::{Environment, IntmaxClient, IntmaxConfig, WalletSession};
use tracing::info;

use crate::cli::Cli;
use crate::error::JuiceError;

/// Resolve configuration from flags first, environment variables second.
fn resolve_config(cli: &Cli) -> Result<IntmaxConfig, JuiceError> {
    let env_name = cli
        .env
        .clone()
        .or_else(|| std::env::var("INTMAX_ENV").ok())
        .unwrap_or_else(|| "testnet".to_string());
    let environment: Environment = env_name
        .parse()
        .map_err(|e| JuiceError::Config(format!("--env: {e}")))?;

    let mut config = IntmaxConfig::new(environment);
    let api_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var("INTMAX_API_URL").ok());
    if let Some(url) = api_url {
        config = config.with_base_url(url);
    }
    Ok(config)
}

/// Initialize the wallet client and wrap it in a session facade.
pub async fn create_wallet_session(cli: &Cli) -> Result<WalletSession, JuiceError> {
    let config = resolve_config(cli)?;
    info!(
        environment = %config.environment,
        url = config.resolved_base_url(),
        "connecting to wallet service"
    );

    let client = IntmaxClient::init(config).await?;
    Ok(WalletSession::new(Arc::new(client)))
}
