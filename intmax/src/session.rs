use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{info, warn};

use crate::client::IntmaxClient;
use crate::error::{Result, WalletError};
use crate::types::*;

/// Logical login state of one wallet handle.
///
/// Only the facade mutates it; callers get cloned snapshots.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub is_connected: bool,
    pub address: Option<String>,
}

/// Session facade over an initialized [`IntmaxClient`].
///
/// Remote operations on one handle run strictly one at a time, each bounded
/// by the configured operation timeout, and every failure maps to a
/// [`WalletError`] kind.
pub struct WalletSession {
    pub client: Arc<IntmaxClient>,
    session: Mutex<Session>,
    /// Serializes remote operations on this handle; held across awaits.
    op_gate: tokio::sync::Mutex<()>,
    operation_timeout: Duration,
}

impl WalletSession {
    pub fn new(client: Arc<IntmaxClient>) -> Self {
        let operation_timeout = client.operation_timeout();
        Self {
            client,
            session: Mutex::new(Session::default()),
            op_gate: tokio::sync::Mutex::new(()),
            operation_timeout,
        }
    }

    /// Snapshot of the current session state.
    pub fn session(&self) -> Session {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Address of the connected wallet, if logged in.
    pub fn address(&self) -> Option<String> {
        let session = self.session();
        if session.is_connected {
            session.address
        } else {
            None
        }
    }

    fn store_session(&self, session: Session) {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// Run one remote operation: exclusive on this handle, bounded by the timeout.
    async fn run_op<T>(&self, op: &'static str, fut: impl Future<Output = Result<T>>) -> Result<T> {
        let _gate = self.op_gate.lock().await;
        match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(WalletError::Timeout {
                op,
                timeout: self.operation_timeout,
            }),
        }
    }

    /// Open a session. On success the stored state carries the wallet address.
    pub async fn login(&self) -> Result<Session> {
        self.run_op("login", async {
            let resp = self
                .client
                .login()
                .await
                .map_err(|e| WalletError::Login(e.to_string()))?;

            info!(address = %resp.address, connected = resp.is_logged_in, "wallet session opened");
            let session = Session {
                is_connected: resp.is_logged_in,
                address: Some(resp.address),
            };
            self.store_session(session.clone());
            Ok(session)
        })
        .await
    }

    /// Close the session. Local state clears unconditionally; the service is
    /// notified best-effort.
    pub async fn logout(&self) -> Session {
        let result = self
            .run_op("logout", async {
                self.store_session(Session::default());
                if let Err(e) = self.client.logout().await {
                    warn!(error = %e, "logout notify failed");
                }
                Ok(())
            })
            .await;
        if let Err(e) = result {
            warn!(error = %e, "logout notify timed out");
        }

        self.session()
    }

    /// Supported tokens, as advertised by the service.
    pub async fn list_tokens(&self) -> Result<Vec<TokenInfo>> {
        self.run_op("list_tokens", async {
            let value = self
                .client
                .get_tokens_list()
                .await
                .map_err(|e| WalletError::TokenList(e.to_string()))?;
            parse_token_list(value)
        })
        .await
    }

    /// Balances for the connected wallet, in minor units.
    pub async fn token_balances(&self) -> Result<Vec<TokenBalance>> {
        if self.address().is_none() {
            return Err(WalletError::BalanceQuery(
                "no active session, log in first".into(),
            ));
        }
        self.run_op("token_balances", async {
            self.client
                .token_balances()
                .await
                .map_err(|e| WalletError::BalanceQuery(e.to_string()))
        })
        .await
    }

    /// Submit a validated deposit request.
    pub async fn submit_deposit(&self, request: &DepositRequest) -> Result<DepositResult> {
        if self.address().is_none() {
            return Err(WalletError::DepositSubmission(
                "no active session, log in first".into(),
            ));
        }
        let result = self
            .run_op("submit_deposit", async {
                self.client
                    .deposit(request)
                    .await
                    .map_err(|e| WalletError::DepositSubmission(e.to_string()))
            })
            .await?;

        info!(
            tx_hash = %result.tx_hash,
            status = %result.status,
            token = %request.token.symbol,
            amount = %request.amount_minor_units,
            "deposit submitted"
        );
        Ok(result)
    }

    /// Submit a validated transfer request.
    pub async fn submit_transfer(&self, request: &TransferRequest) -> Result<TransferResult> {
        if self.address().is_none() {
            return Err(WalletError::TransferSubmission(
                "no active session, log in first".into(),
            ));
        }
        let result = self
            .run_op("submit_transfer", async {
                self.client
                    .transfer(request)
                    .await
                    .map_err(|e| WalletError::TransferSubmission(e.to_string()))
            })
            .await?;

        info!(
            tx_hash = %result.tx_hash,
            status = %result.status,
            token = %request.token.symbol,
            amount = %request.amount_minor_units,
            "transfer submitted"
        );
        Ok(result)
    }

    /// Sign `message`, then verify the returned signature against the same
    /// message. `Ok(false)` means the service answered and rejected the
    /// signature; signing and verification failures keep distinct kinds.
    pub async fn sign_and_verify(&self, message: &str) -> Result<bool> {
        if self.address().is_none() {
            return Err(WalletError::Signing(
                "no active session, log in first".into(),
            ));
        }
        self.run_op("sign_and_verify", async {
            let signed = self
                .client
                .sign_message(message)
                .await
                .map_err(|e| WalletError::Signing(e.to_string()))?;
            let verdict = self
                .client
                .verify_signature(&signed.signature, message)
                .await
                .map_err(|e| WalletError::Verification(e.to_string()))?;
            Ok(verdict.valid)
        })
        .await
    }
}

/// A token list must be a JSON array; anything else is a malformed response,
/// not a decode panic.
fn parse_token_list(value: serde_json::Value) -> Result<Vec<TokenInfo>> {
    if !value.is_array() {
        return Err(WalletError::TokenList(format!(
            "expected a token array, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| WalletError::TokenList(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_session_is_disconnected() {
        let session = Session::default();
        assert!(!session.is_connected);
        assert!(session.address.is_none());
    }

    #[test]
    fn test_parse_token_list_array() {
        let tokens = parse_token_list(json!([
            { "symbol": "ETH", "decimals": 18, "tokenIndex": 0 },
            { "symbol": "USDC", "decimals": 6 }
        ]))
        .unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].symbol, "ETH");
        assert_eq!(tokens[1].decimals.as_ref().and_then(|d| d.as_u64()), Some(6));
    }

    #[test]
    fn test_parse_token_list_rejects_non_array() {
        for value in [json!({ "tokens": [] }), json!("ETH"), json!(42), json!(null)] {
            let err = parse_token_list(value).unwrap_err();
            assert!(matches!(err, WalletError::TokenList(_)), "got {err}");
        }
    }

    #[test]
    fn test_parse_token_list_rejects_malformed_entries() {
        // tokenIndex must be numeric when present
        let err = parse_token_list(json!([{ "symbol": "ETH", "tokenIndex": "zero" }])).unwrap_err();
        assert!(matches!(err, WalletError::TokenList(_)));
    }
}
