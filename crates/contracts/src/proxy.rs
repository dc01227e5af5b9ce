//! The contract-method proxy.
//!
//! [`ContractSuite`] binds the five deployed contracts and exposes one
//! forwarding method per contract function. Reads decode into the snapshot
//! types from `rtk-core`; writes are signed by the provider, awaited to a
//! receipt, and checked for on-chain revert. Token amounts are accepted as
//! decimal strings and scaled by [`crate::units`]. Nothing else happens
//! here: no retries, no caching, no local state.

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionReceipt;

use rtk_core::{ChainConfig, InstitutionSnapshot, ReportSnapshot};

use crate::abi::{IInstitution, IRewardManager, IRtkToken, IUserReports, IValidator};
use crate::error::ContractsError;
use crate::units;

/// Bound instances of the five deployed contracts.
pub struct ContractSuite {
    institution: IInstitution::IInstitutionInstance<DynProvider>,
    user_reports: IUserReports::IUserReportsInstance<DynProvider>,
    validator: IValidator::IValidatorInstance<DynProvider>,
    reward_manager: IRewardManager::IRewardManagerInstance<DynProvider>,
    token: IRtkToken::IRtkTokenInstance<DynProvider>,
}

impl ContractSuite {
    /// Bind the configured contract addresses against `provider`.
    ///
    /// Use a provider from [`crate::provider::read_provider`] for read-only
    /// scripts or [`crate::provider::signing_provider`] when write calls
    /// will be issued.
    pub fn new(config: &ChainConfig, provider: DynProvider) -> Self {
        Self {
            institution: IInstitution::new(config.institution, provider.clone()),
            user_reports: IUserReports::new(config.user_reports, provider.clone()),
            validator: IValidator::new(config.validator, provider.clone()),
            reward_manager: IRewardManager::new(config.reward_manager, provider.clone()),
            token: IRtkToken::new(config.token, provider),
        }
    }

    // ---- institution contract ----

    /// Read one institution record.
    pub async fn institution(&self, id: u64) -> Result<InstitutionSnapshot, ContractsError> {
        let ret = self.institution.getInstitution(U256::from(id)).call().await?;
        Ok(InstitutionSnapshot {
            name: ret.name,
            admin: ret.admin,
            treasury: ret.treasury,
        })
    }

    /// Register `account` as a validator for the institution.
    pub async fn add_validator(
        &self,
        institution_id: u64,
        account: Address,
    ) -> Result<TransactionReceipt, ContractsError> {
        let pending = self
            .institution
            .addValidator(U256::from(institution_id), account)
            .send()
            .await?;
        confirm(pending.get_receipt().await?)
    }

    /// Register `account` as a reporter for the institution.
    pub async fn add_reporter(
        &self,
        institution_id: u64,
        account: Address,
    ) -> Result<TransactionReceipt, ContractsError> {
        let pending = self
            .institution
            .addReporter(U256::from(institution_id), account)
            .send()
            .await?;
        confirm(pending.get_receipt().await?)
    }

    /// Whether `account` is on the institution's validator roster.
    pub async fn is_validator(
        &self,
        institution_id: u64,
        account: Address,
    ) -> Result<bool, ContractsError> {
        Ok(self
            .institution
            .isValidator(U256::from(institution_id), account)
            .call()
            .await?)
    }

    /// Whether `account` is on the institution's reporter roster.
    pub async fn is_reporter(
        &self,
        institution_id: u64,
        account: Address,
    ) -> Result<bool, ContractsError> {
        Ok(self
            .institution
            .isReporter(U256::from(institution_id), account)
            .call()
            .await?)
    }

    /// The institution's full validator roster.
    pub async fn validators_of(
        &self,
        institution_id: u64,
    ) -> Result<Vec<Address>, ContractsError> {
        Ok(self
            .institution
            .validatorsOf(U256::from(institution_id))
            .call()
            .await?)
    }

    // ---- user/report contract ----

    /// Number of reports ever created.
    pub async fn report_count(&self) -> Result<u64, ContractsError> {
        let count = self.user_reports.reportCount().call().await?;
        u64::try_from(count).map_err(|_| ContractsError::ValueRange {
            field: "report_count",
        })
    }

    /// Read one report record.
    pub async fn report(&self, id: u64) -> Result<ReportSnapshot, ContractsError> {
        let raw = self.user_reports.getReport(U256::from(id)).call().await?;
        snapshot_from_report(raw)
    }

    /// Create a report against an institution.
    pub async fn create_report(
        &self,
        institution_id: u64,
        title: &str,
        description: &str,
    ) -> Result<TransactionReceipt, ContractsError> {
        let pending = self
            .user_reports
            .createReport(
                U256::from(institution_id),
                title.to_string(),
                description.to_string(),
            )
            .send()
            .await?;
        confirm(pending.get_receipt().await?)
    }

    /// Appeal a rejected report.
    pub async fn submit_appeal(
        &self,
        report_id: u64,
        reason: &str,
    ) -> Result<TransactionReceipt, ContractsError> {
        let pending = self
            .user_reports
            .submitAppeal(U256::from(report_id), reason.to_string())
            .send()
            .await?;
        confirm(pending.get_receipt().await?)
    }

    // ---- validator contract ----

    /// Cast a validation vote on a report.
    pub async fn validate_report(
        &self,
        report_id: u64,
        approve: bool,
    ) -> Result<TransactionReceipt, ContractsError> {
        let pending = self
            .validator
            .validateReport(U256::from(report_id), approve)
            .send()
            .await?;
        confirm(pending.get_receipt().await?)
    }

    /// Finalize a pending appeal.
    pub async fn finalize_appeal(
        &self,
        report_id: u64,
    ) -> Result<TransactionReceipt, ContractsError> {
        let pending = self
            .validator
            .finalizeAppeal(U256::from(report_id))
            .send()
            .await?;
        confirm(pending.get_receipt().await?)
    }

    /// The validator contract's own view of appeal readiness.
    pub async fn can_finalize_appeal(&self, report_id: u64) -> Result<bool, ContractsError> {
        Ok(self
            .validator
            .canFinalizeAppeal(U256::from(report_id))
            .call()
            .await?)
    }

    // ---- reward manager ----

    /// Deposit RTK into the reward manager. `amount` is a decimal string.
    pub async fn deposit(&self, amount: &str) -> Result<TransactionReceipt, ContractsError> {
        let base = units::to_base_units(amount)?;
        let pending = self.reward_manager.deposit(base).send().await?;
        confirm(pending.get_receipt().await?)
    }

    /// Stake deposited RTK. `amount` is a decimal string.
    pub async fn stake(&self, amount: &str) -> Result<TransactionReceipt, ContractsError> {
        let base = units::to_base_units(amount)?;
        let pending = self.reward_manager.stake(base).send().await?;
        confirm(pending.get_receipt().await?)
    }

    /// Unstake RTK. `amount` is a decimal string.
    pub async fn unstake(&self, amount: &str) -> Result<TransactionReceipt, ContractsError> {
        let base = units::to_base_units(amount)?;
        let pending = self.reward_manager.unstake(base).send().await?;
        confirm(pending.get_receipt().await?)
    }

    /// Base-unit stake held by `account`.
    pub async fn staked_balance(&self, account: Address) -> Result<U256, ContractsError> {
        Ok(self.reward_manager.stakedBalance(account).call().await?)
    }

    /// Token address the reward manager pays out in.
    pub async fn reward_token(&self) -> Result<Address, ContractsError> {
        Ok(self.reward_manager.rewardToken().call().await?)
    }

    /// User/report contract address the reward manager is wired to.
    pub async fn wired_user_contract(&self) -> Result<Address, ContractsError> {
        Ok(self.reward_manager.userContract().call().await?)
    }

    /// Validator contract address the reward manager is wired to.
    pub async fn wired_validator_contract(&self) -> Result<Address, ContractsError> {
        Ok(self.reward_manager.validatorContract().call().await?)
    }

    // ---- RTK token ----

    /// Approve `spender` for a decimal RTK amount.
    pub async fn approve(
        &self,
        spender: Address,
        amount: &str,
    ) -> Result<TransactionReceipt, ContractsError> {
        let base = units::to_base_units(amount)?;
        let pending = self.token.approve(spender, base).send().await?;
        confirm(pending.get_receipt().await?)
    }

    /// Base-unit allowance from `owner` to `spender`.
    pub async fn allowance(
        &self,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ContractsError> {
        Ok(self.token.allowance(owner, spender).call().await?)
    }

    /// Base-unit RTK balance of `account`.
    pub async fn token_balance(&self, account: Address) -> Result<U256, ContractsError> {
        Ok(self.token.balanceOf(account).call().await?)
    }

    /// Token decimals as reported on-chain.
    pub async fn token_decimals(&self) -> Result<u8, ContractsError> {
        Ok(self.token.decimals().call().await?)
    }

    /// Token symbol as reported on-chain.
    pub async fn token_symbol(&self) -> Result<String, ContractsError> {
        Ok(self.token.symbol().call().await?)
    }
}

/// Check a mined receipt for revert and log the outcome.
fn confirm(receipt: TransactionReceipt) -> Result<TransactionReceipt, ContractsError> {
    if !receipt.status() {
        return Err(ContractsError::Reverted {
            tx_hash: receipt.transaction_hash,
        });
    }
    tracing::info!(
        tx_hash = %receipt.transaction_hash,
        gas_used = receipt.gas_used,
        "transaction confirmed",
    );
    Ok(receipt)
}

/// Decode a raw on-chain report into the snapshot type.
pub fn snapshot_from_report(
    raw: IUserReports::Report,
) -> Result<ReportSnapshot, ContractsError> {
    let created_secs =
        i64::try_from(raw.createdAt).map_err(|_| ContractsError::ValueRange { field: "created_at" })?;
    Ok(ReportSnapshot {
        id: u64::try_from(raw.id).map_err(|_| ContractsError::ValueRange { field: "id" })?,
        institution_id: u64::try_from(raw.institutionId)
            .map_err(|_| ContractsError::ValueRange { field: "institution_id" })?,
        reporter: raw.reporter,
        title: raw.title,
        description: raw.description,
        status: raw.status,
        validators: raw.validators,
        created_at: chrono::DateTime::from_timestamp(created_secs, 0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtk_core::report::STATUS_PENDING;

    fn raw_report() -> IUserReports::Report {
        IUserReports::Report {
            id: U256::from(3u64),
            institutionId: U256::from(1u64),
            reporter: Address::repeat_byte(0x11),
            title: "missing ledger entry".into(),
            description: "treasury ledger skips block 1204".into(),
            status: STATUS_PENDING.into(),
            validators: vec![Address::repeat_byte(0x22), Address::repeat_byte(0x33)],
            createdAt: U256::from(1_700_000_000u64),
        }
    }

    #[test]
    fn test_snapshot_preserves_fields() {
        let snapshot = snapshot_from_report(raw_report()).expect("conversion should succeed");
        assert_eq!(snapshot.id, 3);
        assert_eq!(snapshot.institution_id, 1);
        assert_eq!(snapshot.reporter, Address::repeat_byte(0x11));
        assert_eq!(snapshot.status, STATUS_PENDING);
        assert_eq!(snapshot.validators.len(), 2);
    }

    #[test]
    fn test_snapshot_decodes_timestamp() {
        let snapshot = snapshot_from_report(raw_report()).unwrap();
        let created = snapshot.created_at.expect("timestamp should decode");
        assert_eq!(created.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_snapshot_rejects_oversized_id() {
        let mut raw = raw_report();
        raw.id = U256::MAX;
        let err = snapshot_from_report(raw).unwrap_err();
        assert!(matches!(err, ContractsError::ValueRange { field: "id" }));
    }

    #[test]
    fn test_snapshot_rejects_oversized_timestamp() {
        let mut raw = raw_report();
        raw.createdAt = U256::MAX;
        assert!(matches!(
            snapshot_from_report(raw),
            Err(ContractsError::ValueRange { field: "created_at" })
        ));
    }
}
