//! Provider construction for the diagnostic scripts.
//!
//! Read scripts use [`read_provider`]; write scripts use
//! [`signing_provider`], which wires a local private key into the provider
//! so `send` calls are signed and submitted as raw transactions. Both return
//! an erased [`DynProvider`] so the contract instances stay monomorphic.

use alloy::network::EthereumWallet;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use url::Url;

use crate::error::ContractsError;

/// Build a read-only HTTP provider for `rpc_url`.
pub fn read_provider(rpc_url: &str) -> Result<DynProvider, ContractsError> {
    let url: Url = rpc_url.parse()?;
    let provider = ProviderBuilder::new().connect_http(url);
    Ok(provider.erased())
}

/// Build a signing HTTP provider from a hex private key.
///
/// Returns the provider together with the signer's address, which the
/// scripts use as the default "caller" under diagnosis.
pub fn signing_provider(
    rpc_url: &str,
    private_key: &str,
) -> Result<(DynProvider, alloy::primitives::Address), ContractsError> {
    let url: Url = rpc_url.parse()?;
    let signer: PrivateKeySigner = private_key.trim().parse()?;
    let caller = signer.address();

    tracing::debug!(%caller, "using local signer for write calls");

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(url);
    Ok((provider.erased(), caller))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_provider_rejects_bad_url() {
        assert!(matches!(
            read_provider("not a url"),
            Err(ContractsError::UrlParse(_))
        ));
    }

    #[test]
    fn test_signing_provider_rejects_bad_key() {
        let result = signing_provider("http://127.0.0.1:8545", "0xzz");
        assert!(matches!(result, Err(ContractsError::SignerParse(_))));
    }

    #[test]
    fn test_signing_provider_derives_caller_address() {
        // Well-known anvil/hardhat dev key 0.
        let key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
        let (_, caller) =
            signing_provider("http://127.0.0.1:8545", key).expect("dev key should parse");
        assert_eq!(
            format!("{caller:?}").to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }
}
