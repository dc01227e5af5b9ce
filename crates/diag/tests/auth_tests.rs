//! Tests for the authorization mismatch diagnosis.
//!
//! Exercises every disagreement `report-auth` is meant to surface using
//! hand-built snapshots; no chain is involved.

use alloy::primitives::Address;

use rtk_core::report::{STATUS_PENDING, STATUS_REJECTED};
use rtk_core::{InstitutionSnapshot, ReportSnapshot};
use rtk_diag::auth::{diagnose_report_auth, CallerRoles};
use rtk_diag::findings::mismatch_count;
use rtk_diag::{Finding, Severity};

const ADMIN: Address = Address::repeat_byte(0x0a);
const REPORTER: Address = Address::repeat_byte(0x0b);
const VALIDATOR_1: Address = Address::repeat_byte(0x0c);
const VALIDATOR_2: Address = Address::repeat_byte(0x0d);
const OUTSIDER: Address = Address::repeat_byte(0x0e);

fn institution() -> InstitutionSnapshot {
    InstitutionSnapshot {
        name: "North District Hospital".into(),
        admin: ADMIN,
        treasury: Address::repeat_byte(0x0f),
    }
}

fn report(status: &str, validators: Vec<Address>) -> ReportSnapshot {
    ReportSnapshot {
        id: 1,
        institution_id: 1,
        reporter: REPORTER,
        title: "procurement irregularity".into(),
        description: "invoice amounts disagree with delivery logs".into(),
        status: status.into(),
        validators,
        created_at: chrono::DateTime::from_timestamp(1_700_000_000, 0),
    }
}

fn roles(caller: Address, is_validator: bool, is_reporter: bool) -> CallerRoles {
    CallerRoles {
        caller,
        is_validator,
        is_reporter,
    }
}

fn label_of<'a>(findings: &'a [Finding], label: &str) -> &'a Finding {
    findings
        .iter()
        .find(|f| f.label == label)
        .unwrap_or_else(|| panic!("no finding labelled {label}"))
}

// ---------------------------------------------------------------------------
// Clean state
// ---------------------------------------------------------------------------

/// A fully consistent report produces zero mismatches.
#[test]
fn consistent_state_has_no_mismatches() {
    let findings = diagnose_report_auth(
        &report(STATUS_PENDING, vec![VALIDATOR_1]),
        &institution(),
        &[VALIDATOR_1, VALIDATOR_2],
        true,
        &roles(VALIDATOR_1, true, false),
    );
    assert_eq!(mismatch_count(&findings), 0);
}

/// A non-admin caller is reported as informational, not as a mismatch.
#[test]
fn non_admin_caller_is_not_a_mismatch() {
    let findings = diagnose_report_auth(
        &report(STATUS_PENDING, vec![]),
        &institution(),
        &[VALIDATOR_1],
        true,
        &roles(OUTSIDER, false, false),
    );
    assert_eq!(label_of(&findings, "admin").severity, Severity::Ok);
}

// ---------------------------------------------------------------------------
// Mismatches
// ---------------------------------------------------------------------------

/// `isValidator` saying true while `validatorsOf` omits the caller is the
/// core roster-drift bug.
#[test]
fn getter_and_roster_disagreement_flagged() {
    let findings = diagnose_report_auth(
        &report(STATUS_PENDING, vec![]),
        &institution(),
        &[VALIDATOR_2],
        true,
        &roles(VALIDATOR_1, true, false),
    );
    let finding = label_of(&findings, "validator-roster");
    assert_eq!(finding.severity, Severity::Mismatch);
    assert!(finding.detail.contains("omits"));
}

/// The reverse disagreement (on the roster, getter says no) is also flagged.
#[test]
fn roster_member_denied_by_getter_flagged() {
    let findings = diagnose_report_auth(
        &report(STATUS_PENDING, vec![]),
        &institution(),
        &[VALIDATOR_1],
        true,
        &roles(VALIDATOR_1, false, false),
    );
    assert_eq!(
        label_of(&findings, "validator-roster").severity,
        Severity::Mismatch
    );
}

/// The report's own creator asking about themselves and being denied the
/// reporter role is flagged separately from the roster check.
#[test]
fn creator_denied_reporter_role_flagged() {
    let findings = diagnose_report_auth(
        &report(STATUS_REJECTED, vec![]),
        &institution(),
        &[VALIDATOR_1],
        false,
        &roles(REPORTER, false, false),
    );
    assert_eq!(
        label_of(&findings, "caller-reporter").severity,
        Severity::Mismatch
    );
}

/// A report whose creator is no longer a registered reporter is flagged.
#[test]
fn unregistered_reporter_flagged() {
    let findings = diagnose_report_auth(
        &report(STATUS_REJECTED, vec![]),
        &institution(),
        &[VALIDATOR_1],
        false,
        &roles(OUTSIDER, false, false),
    );
    let finding = label_of(&findings, "reporter");
    assert_eq!(finding.severity, Severity::Mismatch);
    assert!(finding.detail.contains("not registered"));
}

/// Validators recorded on the report but missing from the roster are listed
/// individually.
#[test]
fn drifted_report_validators_listed() {
    let findings = diagnose_report_auth(
        &report(STATUS_PENDING, vec![VALIDATOR_1, OUTSIDER]),
        &institution(),
        &[VALIDATOR_1, VALIDATOR_2],
        true,
        &roles(ADMIN, false, false),
    );
    let finding = label_of(&findings, "report-validators");
    assert_eq!(finding.severity, Severity::Mismatch);
    assert!(finding.detail.contains(&OUTSIDER.to_string()));
    assert!(!finding.detail.contains(&VALIDATOR_2.to_string()));
}

/// An unknown status string is itself a finding.
#[test]
fn unknown_status_flagged() {
    let findings = diagnose_report_auth(
        &report("Rejected", vec![]),
        &institution(),
        &[],
        true,
        &roles(ADMIN, false, false),
    );
    assert_eq!(label_of(&findings, "status").severity, Severity::Mismatch);
}
