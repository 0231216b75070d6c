use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Default upper bound for a single wallet operation.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Wallet network the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Testnet,
    Mainnet,
}

impl Environment {
    /// Canonical lowercase name, as reported by `GET /v1/network`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Testnet => "testnet",
            Environment::Mainnet => "mainnet",
        }
    }

    /// Public wallet-service endpoint for this environment.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Environment::Testnet => "https://api.testnet.intmax.io",
            Environment::Mainnet => "https://api.intmax.io",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("testnet") {
            Ok(Environment::Testnet)
        } else if s.eq_ignore_ascii_case("mainnet") {
            Ok(Environment::Mainnet)
        } else {
            Err(ClientError::Config(format!(
                "unknown environment: {s} (expected testnet or mainnet)"
            )))
        }
    }
}

/// Configuration for the Intmax client.
#[derive(Debug, Clone)]
pub struct IntmaxConfig {
    /// Network to connect to.
    pub environment: Environment,
    /// Override for the wallet-service URL; defaults to the environment's public endpoint.
    pub base_url: Option<String>,
    /// Upper bound for a single wallet operation.
    pub operation_timeout: Duration,
}

impl IntmaxConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            base_url: None,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn testnet() -> Self {
        Self::new(Environment::Testnet)
    }

    pub fn mainnet() -> Self {
        Self::new(Environment::Mainnet)
    }

    /// Point the client at a non-default service URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// URL the client will actually talk to.
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.default_base_url())
    }
}

impl Default for IntmaxConfig {
    fn default() -> Self {
        Self::testnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("testnet".parse::<Environment>().unwrap(), Environment::Testnet);
        assert_eq!("MAINNET".parse::<Environment>().unwrap(), Environment::Mainnet);
        assert!("devnet".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }

    #[test]
    fn test_resolved_base_url_defaults_per_environment() {
        assert_eq!(
            IntmaxConfig::testnet().resolved_base_url(),
            "https://api.testnet.intmax.io"
        );
        assert_eq!(
            IntmaxConfig::mainnet().resolved_base_url(),
            "https://api.intmax.io"
        );
    }

    #[test]
    fn test_base_url_override_wins() {
        let config = IntmaxConfig::testnet().with_base_url("http://localhost:8080");
        assert_eq!(config.resolved_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_is_testnet_with_default_timeout() {
        let config = IntmaxConfig::default();
        assert_eq!(config.environment, Environment::Testnet);
        assert_eq!(config.operation_timeout, DEFAULT_OPERATION_TIMEOUT);
    }
}
