//! Chain client for connecting to EVM-compatible nodes.
//!
//! Provides a configured provider with a local signer (private key)
//! for submitting transactions.

use std::sync::Arc;

use alloy::network::{Ethereum, EthereumWallet};
use alloy::primitives::Address;
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller,
};
use alloy::providers::{Identity, ProviderBuilder, RootProvider};
use alloy::signers::local::PrivateKeySigner;

use crate::error::SdkError;
use crate::transport::{ChainTransport, RpcTransport};

/// The concrete provider type produced by `ProviderBuilder::new().wallet(...).connect_http(...)`.
///
/// Fills nonce, gas and chain ID, and signs transactions with the supplied
/// wallet.
pub type HttpProvider = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<Ethereum>,
    Ethereum,
>;

/// An alloy provider with a local signer.
pub struct ChainClient {
    pub provider: HttpProvider,
    pub wallet: EthereumWallet,
    pub signer_address: Address,
    pub chain_id: u64,
}

impl ChainClient {
    /// Create a new chain client from an RPC URL and hex-encoded private key.
    ///
    /// The private key should be a hex string (with or without "0x" prefix).
    pub fn new(rpc_url: &str, private_key: &str, chain_id: u64) -> Result<Self, SdkError> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|e| SdkError::ConfigError(format!("Invalid private key: {e}")))?;
        let signer_address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let url = parse_rpc_url(rpc_url)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet.clone())
            .connect_http(url);

        Ok(Self {
            provider,
            wallet,
            signer_address,
            chain_id,
        })
    }

    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    /// Wrap the provider as the SDK's node transport.
    pub fn into_transport(self) -> Arc<dyn ChainTransport> {
        Arc::new(RpcTransport::new(self.provider))
    }
}

/// Transport without a signer, for read-only use.
pub fn read_only_transport(rpc_url: &str) -> Result<Arc<dyn ChainTransport>, SdkError> {
    let url = parse_rpc_url(rpc_url)?;
    let provider = RootProvider::<Ethereum>::new_http(url);
    Ok(Arc::new(RpcTransport::new(provider)))
}

fn parse_rpc_url(rpc_url: &str) -> Result<url::Url, SdkError> {
    rpc_url
        .parse()
        .map_err(|e| SdkError::ConfigError(format!("Invalid RPC URL: {e}")))
}
