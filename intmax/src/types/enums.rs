use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Submitted,
    Failed,
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TxStatus::Pending => "pending",
            TxStatus::Submitted => "submitted",
            TxStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}
