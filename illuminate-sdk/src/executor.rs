//! Transaction execution pipeline. Every state-changing wrapper method ends
//! up in [`TransactionExecutor::execute`].
//!
//! [`SimulatingExecutor`] picks one of three paths per call:
//!
//! 1. caller set a gas limit → `eth_call` the exact transaction first, send
//!    only if the simulation succeeds;
//! 2. no gas limit, optimisation on → estimate, pad via [`GasOptimizer`], send;
//! 3. no gas limit, optimisation off → send and let the node estimate.
//!
//! There are no retries. Errors come back exactly as the transport produced
//! them so [`crate::exception::parse`] can still read the revert data.

use std::sync::Arc;

use alloy::primitives::keccak256;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::SdkError;
use crate::gas::GasOptimizer;
use crate::transport::ChainTransport;
use crate::types::{CallOptions, ContractCall, TransactionHandle};

/// Strategy for turning an encoded call into a submitted transaction.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    async fn execute(
        &self,
        call: ContractCall,
        options: CallOptions,
        optimize: bool,
    ) -> Result<TransactionHandle, SdkError>;
}

/// Default executor: simulate or estimate, then send.
pub struct SimulatingExecutor {
    transport: Arc<dyn ChainTransport>,
    optimizer: GasOptimizer,
}

impl SimulatingExecutor {
    pub fn new(transport: Arc<dyn ChainTransport>) -> Self {
        Self {
            transport,
            optimizer: GasOptimizer::default(),
        }
    }

    pub fn with_optimizer(mut self, optimizer: GasOptimizer) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn optimizer(&self) -> &GasOptimizer {
        &self.optimizer
    }
}

#[async_trait]
impl TransactionExecutor for SimulatingExecutor {
    async fn execute(
        &self,
        call: ContractCall,
        options: CallOptions,
        optimize: bool,
    ) -> Result<TransactionHandle, SdkError> {
        if options.gas_limit.is_some() {
            debug!(signature = call.signature, to = %call.to, "simulating before send");
            self.transport
                .call(call.to_request(&options))
                .await
                .inspect_err(|e| warn!(signature = call.signature, "simulation failed: {e}"))?;
            return self.transport.send_transaction(call.to_request(&options)).await;
        }

        if optimize {
            debug!(signature = call.signature, to = %call.to, "estimating gas before send");
            let optimized = self
                .optimizer
                .optimize(self.transport.as_ref(), &call, options)
                .await
                .inspect_err(|e| warn!(signature = call.signature, "gas estimation failed: {e}"))?;
            return self.transport.send_transaction(call.to_request(&optimized)).await;
        }

        debug!(signature = call.signature, to = %call.to, "sending without optimisation");
        self.transport.send_transaction(call.to_request(&options)).await
    }
}

/// A call captured by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub call: ContractCall,
    pub options: CallOptions,
    pub optimize: bool,
}

/// Test double that records calls instead of sending them.
///
/// The returned handle's hash is the keccak of the calldata, so identical
/// calls produce identical handles.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn last(&self) -> Option<RecordedCall> {
        self.calls.lock().await.last().cloned()
    }
}

#[async_trait]
impl TransactionExecutor for RecordingExecutor {
    async fn execute(
        &self,
        call: ContractCall,
        options: CallOptions,
        optimize: bool,
    ) -> Result<TransactionHandle, SdkError> {
        let tx_hash = keccak256(&call.calldata);
        self.calls.lock().await.push(RecordedCall {
            call,
            options,
            optimize,
        });
        Ok(TransactionHandle { tx_hash })
    }
}
