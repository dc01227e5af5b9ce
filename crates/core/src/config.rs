//! Environment-driven chain configuration.
//!
//! Every diagnostic binary reads the same set of variables:
//!
//! | Variable              | Required | Description                                  |
//! |-----------------------|----------|----------------------------------------------|
//! | `RTK_RPC_URL`         | yes      | JSON-RPC endpoint, e.g. `http://127.0.0.1:8545` |
//! | `RTK_INSTITUTION`     | yes      | Institution contract address                 |
//! | `RTK_USER_REPORTS`    | yes      | User/report contract address                 |
//! | `RTK_VALIDATOR`       | yes      | Validator contract address                   |
//! | `RTK_REWARD_MANAGER`  | yes      | RewardManager contract address               |
//! | `RTK_TOKEN`           | yes      | RTK token (ERC-20) contract address          |
//! | `RTK_PRIVATE_KEY`     | no       | Hex signing key; required by write scripts   |

use std::str::FromStr;

use alloy::primitives::Address;

/// Addresses and endpoint for one deployment of the contract suite.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Institution contract.
    pub institution: Address,
    /// User/report contract.
    pub user_reports: Address,
    /// Validator contract.
    pub validator: Address,
    /// RewardManager contract.
    pub reward_manager: Address,
    /// RTK token contract.
    pub token: Address,
    /// Signing key for write calls. Read scripts leave this unset.
    pub private_key: Option<String>,
}

/// Errors loading or parsing the environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is missing or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable did not parse as a 20-byte hex address.
    #[error("{var} is not a valid address: {source}")]
    BadAddress {
        /// The offending variable name.
        var: &'static str,
        /// Underlying hex parse error.
        #[source]
        source: alloy::hex::FromHexError,
    },
}

impl ChainConfig {
    /// Load the configuration from the process environment.
    ///
    /// Callers are expected to have run `dotenvy::dotenv().ok()` first so a
    /// local `.env` file is honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rpc_url: required_var("RTK_RPC_URL")?,
            institution: address_var("RTK_INSTITUTION")?,
            user_reports: address_var("RTK_USER_REPORTS")?,
            validator: address_var("RTK_VALIDATOR")?,
            reward_manager: address_var("RTK_REWARD_MANAGER")?,
            token: address_var("RTK_TOKEN")?,
            private_key: std::env::var("RTK_PRIVATE_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
        })
    }

    /// The signing key, or an error naming the variable write scripts need.
    pub fn require_private_key(&self) -> Result<&str, ConfigError> {
        self.private_key
            .as_deref()
            .ok_or(ConfigError::MissingVar("RTK_PRIVATE_KEY"))
    }
}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(var))
}

fn address_var(var: &'static str) -> Result<Address, ConfigError> {
    let raw = required_var(var)?;
    parse_address(var, &raw)
}

/// Parse a `0x`-prefixed (or bare) hex address, attributing failures to `var`.
pub fn parse_address(var: &'static str, raw: &str) -> Result<Address, ConfigError> {
    Address::from_str(raw.trim()).map_err(|source| ConfigError::BadAddress { var, source })
}
