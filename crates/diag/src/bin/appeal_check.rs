//! `appeal-check` -- appeal-finalization state debugging.
//!
//! Reads a report's status from the user/report contract and the
//! `canFinalizeAppeal` answer from the validator contract, and prints
//! whether the two agree. With `--finalize` it also sends the
//! `finalizeAppeal` transaction and re-reads the status afterwards.
//!
//! ```text
//! appeal-check <report-id> [--finalize]
//! ```
//!
//! `--finalize` needs `RTK_PRIVATE_KEY` set.

use rtk_contracts::{read_provider, signing_provider, ContractSuite};
use rtk_diag::appeal::diagnose_appeal;
use rtk_diag::{output, setup};

const USAGE: &str = "appeal-check <report-id> [--finalize]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup::init_tracing("appeal_check=info,rtk_contracts=info");
    let config = setup::load_config()?;

    let report_id = setup::arg_u64(1, "report-id", USAGE)?;
    let do_finalize = std::env::args().any(|a| a == "--finalize");

    let suite = if do_finalize {
        let key = config.require_private_key()?;
        let (provider, caller) = signing_provider(&config.rpc_url, key)?;
        tracing::info!(%caller, "finalization will be sent from this address");
        ContractSuite::new(&config, provider)
    } else {
        ContractSuite::new(&config, read_provider(&config.rpc_url)?)
    };

    let report = suite.report(report_id).await?;
    let can_finalize = suite.can_finalize_appeal(report_id).await?;

    output::section(&format!("report #{report_id}"));
    output::kv("status", &report.status);
    output::kv("canFinalizeAppeal", can_finalize);

    output::section("appeal checks");
    let findings = diagnose_appeal(&report, can_finalize);
    let mismatches = output::print_findings(&findings);

    if do_finalize {
        output::section("finalization");
        match suite.finalize_appeal(report_id).await {
            Ok(receipt) => {
                output::kv("tx", receipt.transaction_hash);
                let after = suite.report(report_id).await?;
                output::kv("status before", &report.status);
                output::kv("status after", &after.status);
            }
            // The revert reason is the diagnosis here, so print and move on.
            Err(e) => output::kv("finalize failed", e),
        }
    }

    output::summary(mismatches);
    if mismatches > 0 {
        std::process::exit(1);
    }
    Ok(())
}
