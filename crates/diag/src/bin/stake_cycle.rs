//! `stake-cycle` -- approve / deposit / stake / unstake write exercise.
//!
//! Walks one RTK amount through the full staking path and prints the
//! balances after every step, so a broken step is visible as the first
//! point where the numbers stop moving.
//!
//! ```text
//! stake-cycle [amount]
//! ```
//!
//! `amount` is a decimal RTK amount, default `1`. Requires
//! `RTK_PRIVATE_KEY`.

use alloy::primitives::Address;

use rtk_contracts::units::from_base_units;
use rtk_contracts::{signing_provider, ContractSuite};
use rtk_diag::{output, setup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup::init_tracing("stake_cycle=info,rtk_contracts=info");
    let config = setup::load_config()?;

    let amount = std::env::args().nth(1).unwrap_or_else(|| "1".to_string());
    let key = config.require_private_key()?;
    let (provider, caller) = signing_provider(&config.rpc_url, key)?;
    let suite = ContractSuite::new(&config, provider);

    let symbol = suite.token_symbol().await?;
    output::section(&format!("stake cycle: {amount} {symbol} as {caller}"));
    print_balances(&suite, caller, config.reward_manager, &symbol, "before").await?;

    tracing::info!(%amount, "approving reward manager");
    suite.approve(config.reward_manager, &amount).await?;
    print_balances(&suite, caller, config.reward_manager, &symbol, "after approve").await?;

    tracing::info!(%amount, "depositing");
    suite.deposit(&amount).await?;
    print_balances(&suite, caller, config.reward_manager, &symbol, "after deposit").await?;

    tracing::info!(%amount, "staking");
    suite.stake(&amount).await?;
    print_balances(&suite, caller, config.reward_manager, &symbol, "after stake").await?;

    tracing::info!(%amount, "unstaking");
    suite.unstake(&amount).await?;
    print_balances(&suite, caller, config.reward_manager, &symbol, "after unstake").await?;

    println!();
    println!("stake cycle completed");
    Ok(())
}

async fn print_balances(
    suite: &ContractSuite,
    caller: Address,
    reward_manager: Address,
    symbol: &str,
    step: &str,
) -> anyhow::Result<()> {
    let wallet = suite.token_balance(caller).await?;
    let allowance = suite.allowance(caller, reward_manager).await?;
    let staked = suite.staked_balance(caller).await?;
    output::kv(
        step,
        format!(
            "wallet {} / allowance {} / staked {} {symbol}",
            from_base_units(wallet),
            from_base_units(allowance),
            from_base_units(staked),
        ),
    );
    Ok(())
}
