//! Authorization mismatch diagnosis for one report.
//!
//! The institution contract answers role queries two ways: the `isValidator`
//! / `isReporter` getters and the `validatorsOf` roster. The original bug
//! class this script chases is exactly those answers disagreeing with each
//! other or with the addresses recorded on a report.

use alloy::primitives::Address;

use rtk_core::report::is_known_status;
use rtk_core::{InstitutionSnapshot, ReportSnapshot};

use crate::findings::Finding;

/// Everything the chain said about one caller's roles.
#[derive(Debug, Clone)]
pub struct CallerRoles {
    /// The address under diagnosis.
    pub caller: Address,
    /// Answer from `isValidator(institutionId, caller)`.
    pub is_validator: bool,
    /// Answer from `isReporter(institutionId, caller)`.
    pub is_reporter: bool,
}

/// Diagnose authorization state around `report`.
///
/// * `roster` is the institution's `validatorsOf` answer.
/// * `reporter_registered` is `isReporter` asked about the report's own
///   reporter address.
pub fn diagnose_report_auth(
    report: &ReportSnapshot,
    institution: &InstitutionSnapshot,
    roster: &[Address],
    reporter_registered: bool,
    caller: &CallerRoles,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    if is_known_status(&report.status) {
        findings.push(Finding::ok(
            "status",
            format!("report status is {:?}", report.status),
        ));
    } else {
        findings.push(Finding::mismatch(
            "status",
            format!("report status {:?} is not a known contract status", report.status),
        ));
    }

    if caller.caller == institution.admin {
        findings.push(Finding::ok(
            "admin",
            format!("caller {} is the institution admin", caller.caller),
        ));
    } else {
        findings.push(Finding::ok(
            "admin",
            format!(
                "caller {} is not the admin (admin is {})",
                caller.caller, institution.admin
            ),
        ));
    }

    // The getter and the roster must agree about the caller.
    let on_roster = roster.contains(&caller.caller);
    if caller.is_validator != on_roster {
        findings.push(Finding::mismatch(
            "validator-roster",
            format!(
                "isValidator says {} but validatorsOf {} the caller",
                caller.is_validator,
                if on_roster { "lists" } else { "omits" },
            ),
        ));
    } else {
        findings.push(Finding::ok(
            "validator-roster",
            format!(
                "isValidator and validatorsOf agree (validator: {})",
                caller.is_validator
            ),
        ));
    }

    if caller.caller == report.reporter && !caller.is_reporter {
        findings.push(Finding::mismatch(
            "caller-reporter",
            "caller created this report but isReporter now returns false for them",
        ));
    } else {
        findings.push(Finding::ok(
            "caller-roles",
            format!(
                "isValidator: {}, isReporter: {}",
                caller.is_validator, caller.is_reporter
            ),
        ));
    }

    if reporter_registered {
        findings.push(Finding::ok(
            "reporter",
            format!("report creator {} is a registered reporter", report.reporter),
        ));
    } else {
        findings.push(Finding::mismatch(
            "reporter",
            format!(
                "report creator {} is not registered as a reporter for this institution",
                report.reporter
            ),
        ));
    }

    // Validators recorded on the report that have since left the roster.
    let drifted: Vec<&Address> = report
        .validators
        .iter()
        .filter(|v| !roster.contains(v))
        .collect();
    if drifted.is_empty() {
        findings.push(Finding::ok(
            "report-validators",
            format!(
                "all {} validator(s) on the report are on the roster",
                report.validators.len()
            ),
        ));
    } else {
        let listed: Vec<String> = drifted.iter().map(|a| a.to_string()).collect();
        findings.push(Finding::mismatch(
            "report-validators",
            format!(
                "{} validator(s) on the report are missing from the roster: {}",
                listed.len(),
                listed.join(", ")
            ),
        ));
    }

    findings
}
