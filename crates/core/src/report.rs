//! Report snapshot type and status vocabulary.
//!
//! Status values must match the strings stored by the user/report contract.
//! The expectation helpers below describe what the scripts *expect* to see
//! at each step; they never gate a call — the contracts remain the sole
//! authority on transitions, and a failed expectation is reported as a
//! finding, not an error.

use alloy::primitives::Address;
use serde::Serialize;

use crate::types::{RecordId, Timestamp};

/// Report created, no validator votes yet.
pub const STATUS_PENDING: &str = "pending";

/// Enough validators approved the report.
pub const STATUS_VALIDATED: &str = "validated";

/// Enough validators rejected the report.
pub const STATUS_REJECTED: &str = "rejected";

/// The reporter appealed a rejection; awaiting finalization.
pub const STATUS_APPEALED: &str = "appealed";

/// Appeal finalized; the record is terminal.
pub const STATUS_CLOSED: &str = "closed";

/// All status values the contract is known to emit.
pub const KNOWN_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_VALIDATED,
    STATUS_REJECTED,
    STATUS_APPEALED,
    STATUS_CLOSED,
];

/// Whether `status` is one of the known contract status strings.
pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}

/// Whether an appeal submission is expected to succeed from `status`.
///
/// The contract only accepts appeals against rejections.
pub fn appeal_expected_from(status: &str) -> bool {
    status == STATUS_REJECTED
}

/// Whether appeal finalization is expected to succeed from `status`.
pub fn finalize_expected_from(status: &str) -> bool {
    status == STATUS_APPEALED
}

/// One report record as read from the user/report contract.
///
/// A point-in-time copy; nothing here is written back.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot {
    /// Report ID assigned by the contract.
    pub id: RecordId,
    /// Institution the report was filed against.
    pub institution_id: RecordId,
    /// Address that created the report.
    pub reporter: Address,
    /// Short title supplied at creation.
    pub title: String,
    /// Free-form description supplied at creation.
    pub description: String,
    /// Current status string (see the `STATUS_*` constants).
    pub status: String,
    /// Validators recorded against this report.
    pub validators: Vec<Address>,
    /// Creation time, from the contract's unix-seconds timestamp.
    pub created_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_accepted() {
        for status in KNOWN_STATUSES {
            assert!(is_known_status(status));
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(!is_known_status("Pending"));
        assert!(!is_known_status(""));
        assert!(!is_known_status("finalized"));
    }

    #[test]
    fn test_appeal_expected_only_from_rejected() {
        assert!(appeal_expected_from(STATUS_REJECTED));
        assert!(!appeal_expected_from(STATUS_PENDING));
        assert!(!appeal_expected_from(STATUS_VALIDATED));
        assert!(!appeal_expected_from(STATUS_APPEALED));
        assert!(!appeal_expected_from(STATUS_CLOSED));
    }

    #[test]
    fn test_finalize_expected_only_from_appealed() {
        assert!(finalize_expected_from(STATUS_APPEALED));
        assert!(!finalize_expected_from(STATUS_REJECTED));
        assert!(!finalize_expected_from(STATUS_CLOSED));
    }

    #[test]
    fn test_snapshot_serializes_addresses_as_hex() {
        let snapshot = ReportSnapshot {
            id: 7,
            institution_id: 1,
            reporter: Address::repeat_byte(0x11),
            title: "late audit".into(),
            description: "quarterly audit filed late".into(),
            status: STATUS_PENDING.into(),
            validators: vec![Address::repeat_byte(0x22)],
            created_at: chrono::DateTime::from_timestamp(1_700_000_000, 0),
        };

        let json = serde_json::to_value(&snapshot).expect("serialization should succeed");
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "pending");
        assert_eq!(
            json["reporter"],
            "0x1111111111111111111111111111111111111111"
        );
    }
}
