//! Appeal-finalization state checks.
//!
//! Compares the report's status string against the validator contract's
//! `canFinalizeAppeal` answer. The two come from different contracts, and
//! the disagreement between them is the finalization bug this script was
//! written to pin down.

use rtk_core::report::{appeal_expected_from, finalize_expected_from, is_known_status};
use rtk_core::ReportSnapshot;

use crate::findings::Finding;

/// Diagnose appeal state for `report`.
///
/// `contract_can_finalize` is the validator contract's `canFinalizeAppeal`
/// answer for the same report.
pub fn diagnose_appeal(report: &ReportSnapshot, contract_can_finalize: bool) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !is_known_status(&report.status) {
        findings.push(Finding::mismatch(
            "status",
            format!("report status {:?} is not a known contract status", report.status),
        ));
        return findings;
    }

    let expected = finalize_expected_from(&report.status);
    match (expected, contract_can_finalize) {
        (true, true) => findings.push(Finding::ok(
            "finalize",
            "status is appealed and the contract agrees the appeal is finalizable",
        )),
        (true, false) => findings.push(Finding::mismatch(
            "finalize",
            "status is appealed but canFinalizeAppeal returns false; the vote \
             threshold or appeal window logic is holding it back",
        )),
        (false, true) => findings.push(Finding::mismatch(
            "finalize",
            format!(
                "canFinalizeAppeal returns true although status is {:?}",
                report.status
            ),
        )),
        (false, false) => findings.push(Finding::ok(
            "finalize",
            format!("no finalization expected from status {:?}", report.status),
        )),
    }

    if appeal_expected_from(&report.status) {
        findings.push(Finding::ok(
            "appeal-window",
            "status is rejected; the reporter can still submit an appeal",
        ));
    }

    findings
}
