//! Error taxonomy for the contract proxy.
//!
//! Everything here is a faithful relay of what the RPC or contract layer
//! raised (revert reasons, gas estimation failures, transport errors);
//! the scripts print these and stop, there is no recovery path.

/// Errors surfaced by the contract proxy.
#[derive(Debug, thiserror::Error)]
pub enum ContractsError {
    /// The RPC URL did not parse.
    #[error("failed to parse the RPC URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The signing key did not parse.
    #[error("failed to parse the signing key: {0}")]
    SignerParse(#[from] alloy::signers::local::LocalSignerError),

    /// A contract call failed (revert, gas estimation, transport).
    #[error("contract call failed: {0}")]
    Call(#[from] alloy::contract::Error),

    /// A transaction was accepted but its receipt never confirmed.
    #[error("transaction did not confirm: {0}")]
    Pending(#[from] alloy::providers::PendingTransactionError),

    /// A transaction mined but the receipt reports revert.
    #[error("transaction {tx_hash} reverted on-chain")]
    Reverted {
        /// Hash of the reverted transaction.
        tx_hash: alloy::primitives::TxHash,
    },

    /// A token amount string did not scale to base units.
    #[error("invalid token amount {amount:?}: {reason}")]
    BadAmount {
        /// The rejected input.
        amount: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An on-chain `uint256` did not fit the snapshot field it maps to.
    #[error("on-chain value for {field} exceeds the snapshot range")]
    ValueRange {
        /// Snapshot field being converted.
        field: &'static str,
    },
}
