//! Typed proxy over the deployed RTK contract suite.
//!
//! Everything here forwards to contracts that are already deployed and
//! assumed correct; there is no local business logic. The crate provides:
//!
//! - [`abi`] — `sol!` bindings for the five contract ABIs.
//! - [`provider`] — read-only and signing provider construction.
//! - [`ContractSuite`] — one forwarding method per contract function, with
//!   token amounts scaled between decimal strings and base units.
//! - [`units`] — the 18-decimal scaling helpers.

pub mod abi;
pub mod error;
pub mod provider;
pub mod proxy;
pub mod units;

pub use error::ContractsError;
pub use provider::{read_provider, signing_provider};
pub use proxy::ContractSuite;
