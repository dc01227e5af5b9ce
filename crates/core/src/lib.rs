//! Shared domain types for the RTK contract diagnostics tooling.
//!
//! The contracts under diagnosis live on-chain and own all of their state;
//! this crate only models the snapshots the scripts read back:
//!
//! - [`report::ReportSnapshot`] — one report record as returned by the
//!   user/report contract.
//! - [`institution::InstitutionSnapshot`] — one institution record.
//! - [`report`] status constants and the expectation helpers the scripts
//!   use to flag surprising chain state.
//! - [`config::ChainConfig`] — environment-driven endpoint and contract
//!   address configuration.

pub mod config;
pub mod institution;
pub mod report;
pub mod types;

pub use config::{ChainConfig, ConfigError};
pub use institution::InstitutionSnapshot;
pub use report::ReportSnapshot;
