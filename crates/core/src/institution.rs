//! Institution snapshot type.

use alloy::primitives::Address;
use serde::Serialize;

/// One institution record as read from the institution contract.
#[derive(Debug, Clone, Serialize)]
pub struct InstitutionSnapshot {
    /// Display name registered for the institution.
    pub name: String,
    /// Address allowed to manage rosters for this institution.
    pub admin: Address,
    /// Address receiving the institution's share of rewards.
    pub treasury: Address,
}
