use std::time::Duration;

use tracing::info;

use crate::config::{Environment, IntmaxConfig};
use crate::error::{ClientResult, Result, WalletError};
use crate::rest::IntmaxHttpClient;
use crate::types::*;

/// Initialized handle to the wallet service.
///
/// Exposes the raw capability set; [`crate::session::WalletSession`] layers
/// session state, per-handle serialization, and error mapping on top.
#[derive(Debug, Clone)]
pub struct IntmaxClient {
    /// Network this client was initialized for.
    pub environment: Environment,
    /// Identity reported by the service at init.
    pub network: NetworkInfo,
    /// HTTP client.
    pub http_client: IntmaxHttpClient,
    operation_timeout: Duration,
}

impl IntmaxClient {
    /// Create and initialize a client: probe the service and verify it serves
    /// the configured environment.
    pub async fn init(config: IntmaxConfig) -> Result<Self> {
        let base_url = config.resolved_base_url().to_string();
        let http_client = IntmaxHttpClient::new(&base_url)
            .map_err(|e| WalletError::Initialization(e.to_string()))?;

        let network = http_client.get_network().await.map_err(|e| {
            WalletError::Initialization(format!("wallet service unreachable at {base_url}: {e}"))
        })?;

        if !network.network.eq_ignore_ascii_case(config.environment.as_str()) {
            return Err(WalletError::Initialization(format!(
                "environment mismatch: configured {}, service reports {}",
                config.environment, network.network
            )));
        }

        info!(environment = %config.environment, %base_url, "wallet client initialized");

        Ok(Self {
            environment: config.environment,
            network,
            http_client,
            operation_timeout: config.operation_timeout,
        })
    }

    /// Configured per-operation timeout.
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    // --- Raw wallet capabilities (REST delegates) ---

    /// Open a wallet session.
    pub async fn login(&self) -> ClientResult<LoginResponse> {
        self.http_client.post_login().await
    }

    /// Close the wallet session.
    pub async fn logout(&self) -> ClientResult<()> {
        self.http_client.post_logout().await
    }

    /// Fetch the supported token list as raw JSON.
    pub async fn get_tokens_list(&self) -> ClientResult<serde_json::Value> {
        self.http_client.get_tokens().await
    }

    /// Fetch per-token balances for the active session.
    pub async fn token_balances(&self) -> ClientResult<Vec<TokenBalance>> {
        self.http_client.get_balances().await
    }

    /// Submit a deposit.
    pub async fn deposit(&self, request: &DepositRequest) -> ClientResult<DepositResult> {
        self.http_client.post_deposit(request).await
    }

    /// Submit a transfer.
    pub async fn transfer(&self, request: &TransferRequest) -> ClientResult<TransferResult> {
        self.http_client.post_transfer(request).await
    }

    /// Sign a message with the session key.
    pub async fn sign_message(&self, message: &str) -> ClientResult<SignResponse> {
        self.http_client.post_sign(message).await
    }

    /// Verify a signature over a message.
    pub async fn verify_signature(
        &self,
        signature: &str,
        message: &str,
    ) -> ClientResult<VerifyResponse> {
        self.http_client.post_verify(signature, message).await
    }
}
