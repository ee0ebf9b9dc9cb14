//! Node access used by the executor and the contract readers.
//!
//! [`ChainTransport`] is the three-primitive surface the SDK needs from a
//! node: gas estimation, static calls and transaction submission.
//! [`RpcTransport`] implements it over any alloy [`Provider`] and sorts
//! node failures into the error shapes [`crate::exception`] understands.

use alloy::primitives::Bytes;
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::transports::TransportError;
use async_trait::async_trait;

use crate::error::{RpcFailure, SdkError};
use crate::exception::{decode_exception, revert_bytes};
use crate::types::TransactionHandle;

#[async_trait]
pub trait ChainTransport: Send + Sync {
    /// `eth_estimateGas`
    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, SdkError>;

    /// `eth_call` against the latest block.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, SdkError>;

    /// Sign (if the provider carries a wallet) and broadcast.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TransactionHandle, SdkError>;
}

/// [`ChainTransport`] backed by an alloy provider.
#[derive(Debug, Clone)]
pub struct RpcTransport<P> {
    provider: P,
}

impl<P> RpcTransport<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P> ChainTransport for RpcTransport<P>
where
    P: Provider + Send + Sync,
{
    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, SdkError> {
        self.provider
            .estimate_gas(tx)
            .await
            .map_err(|e| match rpc_failure(&e) {
                Some(failure) => SdkError::UnpredictableGas(failure),
                None => SdkError::Transport(e.to_string()),
            })
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, SdkError> {
        self.provider.call(tx).await.map_err(|e| match rpc_failure(&e) {
            Some(failure) => call_exception(failure),
            None => SdkError::Transport(e.to_string()),
        })
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TransactionHandle, SdkError> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| match rpc_failure(&e) {
                Some(failure) => SdkError::Rpc(failure),
                None => SdkError::Transport(e.to_string()),
            })?;

        Ok(TransactionHandle {
            tx_hash: *pending.tx_hash(),
        })
    }
}

/// Extract the JSON-RPC error response from a transport error, if the node
/// answered with one.
pub fn rpc_failure(e: &TransportError) -> Option<RpcFailure> {
    let payload = e.as_error_resp()?;
    Some(RpcFailure {
        code: payload.code,
        message: payload.message.to_string(),
        data: payload
            .data
            .as_ref()
            .and_then(|raw| serde_json::from_str(raw.get()).ok()),
    })
}

/// Build a [`SdkError::CallException`], decoding the `Exception` revert up
/// front so callers get the arguments directly.
pub fn call_exception(failure: RpcFailure) -> SdkError {
    let data = revert_bytes(&failure);
    let exception = data.as_ref().and_then(|d| decode_exception(d));
    SdkError::CallException {
        message: failure.message,
        exception,
        data,
    }
}
