//! `reward-wiring` -- reward-manager wiring and balance checks.
//!
//! Reads the addresses the reward manager is wired to and compares them
//! against the configured deployment, then reports token metadata and the
//! caller's balances when a caller is known.
//!
//! ```text
//! reward-wiring
//! ```
//!
//! Set `RTK_CALLER` (or `RTK_PRIVATE_KEY`) to include balance checks for a
//! specific address.

use alloy::primitives::Address;

use rtk_contracts::units::{from_base_units, RTK_DECIMALS};
use rtk_contracts::{read_provider, signing_provider, ContractSuite};
use rtk_core::config::parse_address;
use rtk_diag::wiring::{diagnose_token_decimals, diagnose_wiring, WiringCheck};
use rtk_diag::{output, setup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup::init_tracing("reward_wiring=info,rtk_contracts=info");
    let config = setup::load_config()?;

    // A signer is not needed for reads; it only supplies a default caller.
    let (provider, caller) = match (std::env::var("RTK_CALLER").ok(), &config.private_key) {
        (Some(raw), _) => (
            read_provider(&config.rpc_url)?,
            Some(parse_address("RTK_CALLER", &raw)?),
        ),
        (None, Some(key)) => {
            let (provider, caller) = signing_provider(&config.rpc_url, key)?;
            (provider, Some(caller))
        }
        (None, None) => (read_provider(&config.rpc_url)?, None),
    };
    let suite = ContractSuite::new(&config, provider);

    let checks = vec![
        WiringCheck {
            label: "reward-token",
            configured: config.token,
            wired: suite.reward_token().await?,
        },
        WiringCheck {
            label: "user-contract",
            configured: config.user_reports,
            wired: suite.wired_user_contract().await?,
        },
        WiringCheck {
            label: "validator-contract",
            configured: config.validator,
            wired: suite.wired_validator_contract().await?,
        },
    ];

    output::section("reward manager wiring");
    output::kv("reward manager", config.reward_manager);
    let mut findings = diagnose_wiring(&checks);

    let symbol = suite.token_symbol().await?;
    let decimals = suite.token_decimals().await?;
    output::kv("token symbol", &symbol);
    findings.push(diagnose_token_decimals(decimals, RTK_DECIMALS));

    let mismatches = output::print_findings(&findings);

    if let Some(caller) = caller {
        output::section(&format!("balances for {caller}"));
        print_balances(&suite, caller, &symbol, config.reward_manager).await?;
    }

    output::summary(mismatches);
    if mismatches > 0 {
        std::process::exit(1);
    }
    Ok(())
}

async fn print_balances(
    suite: &ContractSuite,
    caller: Address,
    symbol: &str,
    reward_manager: Address,
) -> anyhow::Result<()> {
    let balance = suite.token_balance(caller).await?;
    let allowance = suite.allowance(caller, reward_manager).await?;
    let staked = suite.staked_balance(caller).await?;

    output::kv("wallet", format!("{} {symbol}", from_base_units(balance)));
    output::kv(
        "allowance to manager",
        format!("{} {symbol}", from_base_units(allowance)),
    );
    output::kv("staked", format!("{} {symbol}", from_base_units(staked)));
    Ok(())
}
