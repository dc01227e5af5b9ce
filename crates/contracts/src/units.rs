//! Token amount scaling.
//!
//! RTK is an 18-decimal ERC-20-style token. Amounts cross the proxy
//! boundary as human decimal strings ("1.5") and hit the chain as base
//! units (1_500_000_000_000_000_000).

use alloy::primitives::utils::{format_units, parse_units, ParseUnits};
use alloy::primitives::U256;

use crate::error::ContractsError;

/// Decimal places used by the RTK token.
pub const RTK_DECIMALS: u8 = 18;

/// Scale a decimal amount string to 18-decimal base units.
pub fn to_base_units(amount: &str) -> Result<U256, ContractsError> {
    let parsed = parse_units(amount.trim(), RTK_DECIMALS).map_err(|e| {
        ContractsError::BadAmount {
            amount: amount.to_string(),
            reason: e.to_string(),
        }
    })?;
    match parsed {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => Err(ContractsError::BadAmount {
            amount: amount.to_string(),
            reason: "negative amounts are not accepted".to_string(),
        }),
    }
}

/// Format base units back to a decimal string for console output.
///
/// Falls back to the raw integer if formatting fails, so a weird on-chain
/// value never masks the diagnostic output it appears in.
pub fn from_base_units(amount: U256) -> String {
    format_units(amount, RTK_DECIMALS).unwrap_or_else(|_| amount.to_string())
}
