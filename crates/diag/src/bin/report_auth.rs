//! `report-auth` -- authorization mismatch debugging for one report.
//!
//! Reads the report, its institution, and every role answer the
//! institution contract gives, then prints where they disagree.
//!
//! ```text
//! report-auth <report-id> [caller-address]
//! ```
//!
//! The caller defaults to `RTK_CALLER` from the environment. Exits nonzero
//! when mismatches are found so the script can gate a larger repro.

use rtk_contracts::{read_provider, ContractSuite};
use rtk_core::config::parse_address;
use rtk_diag::auth::{diagnose_report_auth, CallerRoles};
use rtk_diag::{output, setup};

const USAGE: &str = "report-auth <report-id> [caller-address]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup::init_tracing("report_auth=info,rtk_contracts=info");
    let config = setup::load_config()?;

    let report_id = setup::arg_u64(1, "report-id", USAGE)?;
    let caller_raw = std::env::args()
        .nth(2)
        .or_else(|| std::env::var("RTK_CALLER").ok())
        .ok_or_else(|| anyhow::anyhow!("pass a caller address or set RTK_CALLER"))?;
    let caller = parse_address("RTK_CALLER", &caller_raw)?;

    let suite = ContractSuite::new(&config, read_provider(&config.rpc_url)?);

    tracing::info!(report_id, %caller, "fetching report and role state");
    let report = suite.report(report_id).await?;
    let institution = suite.institution(report.institution_id).await?;
    let roster = suite.validators_of(report.institution_id).await?;
    let reporter_registered = suite
        .is_reporter(report.institution_id, report.reporter)
        .await?;
    let roles = CallerRoles {
        caller,
        is_validator: suite.is_validator(report.institution_id, caller).await?,
        is_reporter: suite.is_reporter(report.institution_id, caller).await?,
    };

    output::section(&format!("report #{report_id}"));
    output::kv("title", &report.title);
    output::kv("status", &report.status);
    output::kv("reporter", report.reporter);
    match report.created_at {
        Some(created) => output::kv("created", created.to_rfc3339()),
        None => output::kv("created", "<unreadable timestamp>"),
    }

    output::section(&format!("institution #{}", report.institution_id));
    output::kv("name", &institution.name);
    output::kv("admin", institution.admin);
    output::kv("treasury", institution.treasury);
    output::kv("validators", roster.len());

    output::section("authorization checks");
    let findings =
        diagnose_report_auth(&report, &institution, &roster, reporter_registered, &roles);
    let mismatches = output::print_findings(&findings);
    output::summary(mismatches);

    if mismatches > 0 {
        std::process::exit(1);
    }
    Ok(())
}
