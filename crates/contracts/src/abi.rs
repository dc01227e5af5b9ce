//! ABI bindings for the deployed contract suite.
//!
//! Function signatures mirror the deployed ABIs; nothing here is compiled
//! or deployed from this repository.

use alloy::sol;

sol! {
    /// Institution records plus the validator and reporter rosters.
    #[sol(rpc)]
    interface IInstitution {
        function getInstitution(uint256 institutionId) external view returns (string memory name, address admin, address treasury);
        function addValidator(uint256 institutionId, address validator) external;
        function addReporter(uint256 institutionId, address reporter) external;
        function isValidator(uint256 institutionId, address account) external view returns (bool);
        function isReporter(uint256 institutionId, address account) external view returns (bool);
        function validatorsOf(uint256 institutionId) external view returns (address[] memory);
    }

    /// Report records and appeal submission.
    #[sol(rpc)]
    interface IUserReports {
        struct Report {
            uint256 id;
            uint256 institutionId;
            address reporter;
            string title;
            string description;
            string status;
            address[] validators;
            uint256 createdAt;
        }

        function reportCount() external view returns (uint256);
        function getReport(uint256 reportId) external view returns (Report memory);
        function createReport(uint256 institutionId, string calldata title, string calldata description) external returns (uint256);
        function submitAppeal(uint256 reportId, string calldata reason) external;
    }

    /// Validator votes and appeal finalization.
    #[sol(rpc)]
    interface IValidator {
        function validateReport(uint256 reportId, bool approve) external;
        function finalizeAppeal(uint256 reportId) external;
        function canFinalizeAppeal(uint256 reportId) external view returns (bool);
    }

    /// Staking and reward distribution.
    #[sol(rpc)]
    interface IRewardManager {
        function deposit(uint256 amount) external;
        function stake(uint256 amount) external;
        function unstake(uint256 amount) external;
        function stakedBalance(address account) external view returns (uint256);
        function rewardToken() external view returns (address);
        function userContract() external view returns (address);
        function validatorContract() external view returns (address);
    }

    /// The RTK token's ERC-20 surface.
    #[sol(rpc)]
    interface IRtkToken {
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string memory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{keccak256, Address, U256};
    use alloy::sol_types::SolCall;

    /// Selector bytes must match the canonical keccak-256 signature hashes,
    /// otherwise every call against the deployed ABI reverts on dispatch.
    #[test]
    fn test_selectors_match_canonical_signatures() {
        let cases: &[(&str, [u8; 4])] = &[
            ("approve(address,uint256)", IRtkToken::approveCall::SELECTOR),
            ("balanceOf(address)", IRtkToken::balanceOfCall::SELECTOR),
            ("getReport(uint256)", IUserReports::getReportCall::SELECTOR),
            (
                "submitAppeal(uint256,string)",
                IUserReports::submitAppealCall::SELECTOR,
            ),
            (
                "validateReport(uint256,bool)",
                IValidator::validateReportCall::SELECTOR,
            ),
            (
                "finalizeAppeal(uint256)",
                IValidator::finalizeAppealCall::SELECTOR,
            ),
            (
                "addValidator(uint256,address)",
                IInstitution::addValidatorCall::SELECTOR,
            ),
            ("stake(uint256)", IRewardManager::stakeCall::SELECTOR),
        ];

        for (signature, selector) in cases {
            let expected = &keccak256(signature.as_bytes())[..4];
            assert_eq!(expected, &selector[..], "selector mismatch for {signature}");
        }
    }

    /// `approve` calldata lays out selector, padded spender, then amount.
    #[test]
    fn test_approve_calldata_layout() {
        let spender = Address::repeat_byte(0xab);
        let call = IRtkToken::approveCall {
            spender,
            amount: U256::from(1_000u64),
        };
        let data = call.abi_encode();

        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[..4], IRtkToken::approveCall::SELECTOR);
        assert_eq!(&data[16..36], spender.as_slice());
        assert_eq!(U256::from_be_slice(&data[36..]), U256::from(1_000u64));
    }
}
