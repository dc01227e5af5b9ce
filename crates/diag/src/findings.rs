//! The finding type every diagnosis produces.

/// How a single check turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Observed state matches what the scripts expect.
    Ok,
    /// Observed state contradicts expectations; this is what the script
    /// exists to surface.
    Mismatch,
}

/// One observation about on-chain state.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Outcome of the check.
    pub severity: Severity,
    /// Short label naming the check.
    pub label: &'static str,
    /// Human explanation, printed verbatim.
    pub detail: String,
}

impl Finding {
    /// A passing check.
    pub fn ok(label: &'static str, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            label,
            detail: detail.into(),
        }
    }

    /// A failed expectation.
    pub fn mismatch(label: &'static str, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Mismatch,
            label,
            detail: detail.into(),
        }
    }
}

/// Count the mismatches in a finding list.
pub fn mismatch_count(findings: &[Finding]) -> usize {
    findings
        .iter()
        .filter(|f| f.severity == Severity::Mismatch)
        .count()
}
