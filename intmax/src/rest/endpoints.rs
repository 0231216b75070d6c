use serde_json::{json, Value};

use crate::error::ClientResult;
use crate::rest::IntmaxHttpClient;
use crate::types::*;

impl IntmaxHttpClient {
    // --- Network ---

    /// GET /v1/network - Identity of the wallet service.
    pub async fn get_network(&self) -> ClientResult<NetworkInfo> {
        self.get("/v1/network").await
    }

    // --- Session ---

    /// POST /v1/session/login - Open a wallet session; user approval happens wallet-side.
    pub async fn post_login(&self) -> ClientResult<LoginResponse> {
        self.post("/v1/session/login", &json!({})).await
    }

    /// POST /v1/session/logout - Close the wallet session.
    pub async fn post_logout(&self) -> ClientResult<()> {
        self.post_empty("/v1/session/logout", &json!({})).await
    }

    // --- Tokens ---

    /// GET /v1/tokens - Supported token list, decoded leniently.
    pub async fn get_tokens(&self) -> ClientResult<Value> {
        self.get("/v1/tokens").await
    }

    /// GET /v1/balances - Per-token balances for the active session.
    pub async fn get_balances(&self) -> ClientResult<Vec<TokenBalance>> {
        self.get("/v1/balances").await
    }

    // --- Transactions ---

    /// POST /v1/deposits - Submit a deposit.
    pub async fn post_deposit(&self, request: &DepositRequest) -> ClientResult<DepositResult> {
        self.post("/v1/deposits", request).await
    }

    /// POST /v1/transfers - Submit a transfer.
    pub async fn post_transfer(&self, request: &TransferRequest) -> ClientResult<TransferResult> {
        self.post("/v1/transfers", request).await
    }

    // --- Signatures ---

    /// POST /v1/sign - Sign a message with the session key.
    pub async fn post_sign(&self, message: &str) -> ClientResult<SignResponse> {
        self.post("/v1/sign", &json!({ "message": message })).await
    }

    /// POST /v1/verify - Verify a signature over a message.
    pub async fn post_verify(&self, signature: &str, message: &str) -> ClientResult<VerifyResponse> {
        self.post("/v1/verify", &json!({ "signature": signature, "message": message }))
            .await
    }
}
