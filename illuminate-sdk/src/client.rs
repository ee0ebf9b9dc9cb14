//! Entry point that wires one transport and one executor into every
//! contract client.

use std::sync::Arc;

use alloy::primitives::Address;
use tracing::info;

use crate::binding::ContractBinding;
use crate::chain::{ChainClient, read_only_transport};
use crate::config::SdkConfig;
use crate::erc20::Erc20;
use crate::error::SdkError;
use crate::executor::{SimulatingExecutor, TransactionExecutor};
use crate::gas::GasOptimizer;
use crate::lender::Lender;
use crate::market_place::MarketPlace;
use crate::redeemer::Redeemer;
use crate::strategy::Strategy;
use crate::strategy_router::{EthStrategyRouter, StrategyRouter};
use crate::transport::ChainTransport;

#[derive(Debug, Clone)]
pub struct IlluminateClient {
    config: SdkConfig,
    signer: Option<Address>,
    template: ContractBinding,
}

impl IlluminateClient {
    /// Connect to the node in `config`. A private key enables sending;
    /// without one only reads work.
    pub fn connect(config: &SdkConfig) -> Result<Self, SdkError> {
        let (transport, signer) = match config.private_key.as_deref() {
            Some(key) => {
                let chain = ChainClient::new(&config.rpc_url, key, config.chain_id)?;
                let signer = chain.signer_address;
                (chain.into_transport(), Some(signer))
            }
            None => (read_only_transport(&config.rpc_url)?, None),
        };

        let executor = SimulatingExecutor::new(transport.clone())
            .with_optimizer(GasOptimizer::new(config.gas_margin_percent));

        info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            signer = ?signer,
            "connected Illuminate client"
        );

        let mut client = Self::new(config.clone(), transport, Arc::new(executor));
        client.signer = signer;
        Ok(client)
    }

    /// Build a client over a caller-supplied transport and executor.
    pub fn new(
        config: SdkConfig,
        transport: Arc<dyn ChainTransport>,
        executor: Arc<dyn TransactionExecutor>,
    ) -> Self {
        let template = ContractBinding::new(config.market_place, transport, executor)
            .with_gas_optimization(config.optimize_gas);
        Self {
            config,
            signer: None,
            template,
        }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Address transactions are signed from, if a key was configured.
    pub fn signer(&self) -> Option<Address> {
        self.signer
    }

    pub fn market_place(&self) -> MarketPlace {
        MarketPlace::new(self.template.at(self.config.market_place))
    }

    pub fn lender(&self) -> Lender {
        Lender::new(self.template.at(self.config.lender))
    }

    pub fn redeemer(&self) -> Redeemer {
        Redeemer::new(self.template.at(self.config.redeemer))
    }

    pub fn erc20(&self, token: Address) -> Erc20 {
        Erc20::new(self.template.at(token))
    }

    pub fn strategy(&self, strategy: Address) -> Strategy {
        Strategy::new(self.template.at(strategy))
    }

    pub fn strategy_router(&self) -> Result<StrategyRouter, SdkError> {
        let address = self
            .config
            .strategy_router
            .ok_or_else(|| SdkError::ConfigError("strategy router address is not set".into()))?;
        Ok(StrategyRouter::new(self.template.at(address)))
    }

    pub fn eth_strategy_router(&self) -> Result<EthStrategyRouter, SdkError> {
        let address = self.config.eth_strategy_router.ok_or_else(|| {
            SdkError::ConfigError("ETH strategy router address is not set".into())
        })?;
        Ok(EthStrategyRouter::new(self.template.at(address)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::binding::testing::CannedReads;
    use crate::dispatch::{LendRequest, PoolLend};
    use crate::executor::RecordingExecutor;
    use crate::types::CallOptions;

    fn config() -> SdkConfig {
        SdkConfig::new(
            Address::repeat_byte(0x01),
            Address::repeat_byte(0x02),
            Address::repeat_byte(0x03),
        )
    }

    #[tokio::test]
    async fn test_clients_target_configured_addresses() {
        let mut config = config();
        config.optimize_gas = false;
        let executor = Arc::new(RecordingExecutor::new());
        let client = IlluminateClient::new(
            config,
            Arc::new(CannedReads::default()),
            executor.clone(),
        );

        assert_eq!(client.market_place().address(), Address::repeat_byte(0x01));
        assert_eq!(client.redeemer().address(), Address::repeat_byte(0x03));
        assert_eq!(
            client.erc20(Address::repeat_byte(0x09)).address(),
            Address::repeat_byte(0x09)
        );

        let request = LendRequest::Yield(PoolLend {
            underlying: Address::repeat_byte(0xaa),
            maturity: "1".into(),
            amount: "1".into(),
            pool: Address::repeat_byte(0xbb),
        });
        client
            .lender()
            .lend(&request, CallOptions::default())
            .await
            .unwrap();
        let recorded = executor.last().await.unwrap();
        assert_eq!(recorded.call.to, Address::repeat_byte(0x02));
        assert!(!recorded.optimize);
    }

    #[test]
    fn test_missing_router_is_config_error() {
        let client = IlluminateClient::new(
            config(),
            Arc::new(CannedReads::default()),
            Arc::new(RecordingExecutor::new()),
        );
        assert!(matches!(client.strategy_router(), Err(SdkError::ConfigError(_))));
        assert!(matches!(client.eth_strategy_router(), Err(SdkError::ConfigError(_))));
    }

    #[test]
    fn test_connect_read_only() {
        let client = IlluminateClient::connect(&config()).unwrap();
        assert!(client.signer().is_none());
    }

    #[test]
    fn test_connect_with_key() {
        let mut config = config();
        config.private_key =
            Some("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".into());
        let client = IlluminateClient::connect(&config).unwrap();
        assert_eq!(
            client.signer(),
            Some(
                "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
                    .parse::<Address>()
                    .unwrap()
            )
        );
    }
}
