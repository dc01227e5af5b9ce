//! Reward-manager wiring comparison.
//!
//! The reward manager stores the addresses of the token and the other two
//! contracts it pays out for. A redeploy that forgets to re-point one of
//! them is the wiring bug this script surfaces.

use alloy::primitives::Address;

use crate::findings::Finding;

/// One wired address read back from the reward manager, paired with the
/// address the environment says it should be.
#[derive(Debug, Clone)]
pub struct WiringCheck {
    /// Which hook this is (e.g. `reward-token`).
    pub label: &'static str,
    /// Address from local configuration.
    pub configured: Address,
    /// Address the reward manager actually holds.
    pub wired: Address,
}

/// Compare every wired address against configuration.
pub fn diagnose_wiring(checks: &[WiringCheck]) -> Vec<Finding> {
    checks
        .iter()
        .map(|check| {
            if check.wired == Address::ZERO {
                Finding::mismatch(
                    check.label,
                    format!(
                        "reward manager has the zero address wired (expected {})",
                        check.configured
                    ),
                )
            } else if check.wired != check.configured {
                Finding::mismatch(
                    check.label,
                    format!(
                        "reward manager is wired to {} but configuration says {}",
                        check.wired, check.configured
                    ),
                )
            } else {
                Finding::ok(check.label, format!("wired to {}", check.wired))
            }
        })
        .collect()
}

/// Check the token's on-chain decimals against the scaling the proxy uses.
pub fn diagnose_token_decimals(on_chain: u8, local: u8) -> Finding {
    if on_chain == local {
        Finding::ok("token-decimals", format!("token reports {on_chain} decimals"))
    } else {
        Finding::mismatch(
            "token-decimals",
            format!(
                "token reports {on_chain} decimals but amounts are scaled at {local}; \
                 every converted amount is off by 10^{}",
                i32::from(on_chain).abs_diff(i32::from(local)),
            ),
        )
    }
}
