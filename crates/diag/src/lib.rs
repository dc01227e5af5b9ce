//! Diagnostic logic shared by the RTK debugging binaries.
//!
//! Each binary fetches snapshots through `rtk-contracts` and hands them to
//! a pure diagnosis function here, which turns them into a list of
//! [`Finding`]s. Keeping the comparison logic out of the binaries makes it
//! testable without a chain:
//!
//! - [`auth`] — authorization mismatch diagnosis for one report.
//! - [`appeal`] — appeal-finalization state checks.
//! - [`wiring`] — reward-manager address wiring comparison.
//! - [`output`] — console formatting for findings and key/value lines.

pub mod appeal;
pub mod auth;
pub mod findings;
pub mod lifecycle;
pub mod output;
pub mod setup;
pub mod wiring;

pub use findings::{Finding, Severity};
