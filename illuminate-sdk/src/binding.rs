//! One deployed contract: its address plus the transport used for reads and
//! the executor used for writes. Every wrapper is a thin layer over this.

use std::sync::Arc;

use alloy::dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy::json_abi::Function;
use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::error::SdkError;
use crate::executor::TransactionExecutor;
use crate::result::{self, Unwrapped};
use crate::transport::ChainTransport;
use crate::types::{CallOptions, ContractCall, TransactionHandle};

#[derive(Clone)]
pub struct ContractBinding {
    address: Address,
    transport: Arc<dyn ChainTransport>,
    executor: Arc<dyn TransactionExecutor>,
    optimize: bool,
}

impl ContractBinding {
    pub fn new(
        address: Address,
        transport: Arc<dyn ChainTransport>,
        executor: Arc<dyn TransactionExecutor>,
    ) -> Self {
        Self {
            address,
            transport,
            executor,
            optimize: true,
        }
    }

    pub fn with_gas_optimization(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn transport(&self) -> &Arc<dyn ChainTransport> {
        &self.transport
    }

    pub fn executor(&self) -> &Arc<dyn TransactionExecutor> {
        &self.executor
    }

    /// Rebind the same transport and executor to another address.
    pub fn at(&self, address: Address) -> Self {
        Self {
            address,
            ..self.clone()
        }
    }

    /// Static-call a view function and decode its return value.
    pub async fn read<C: SolCall>(&self, call: C) -> Result<C::Return, SdkError> {
        let data = self.static_call(Bytes::from(call.abi_encode())).await?;
        Ok(C::abi_decode_returns(&data)?)
    }

    /// Static-call a function described by a human-readable signature, e.g.
    /// `function holdings(address,uint256) returns (uint256)`.
    ///
    /// Returns `None` for functions without outputs, the bare value for a
    /// single output and the whole tuple otherwise.
    pub async fn call_signature(
        &self,
        signature: &str,
        args: &[DynSolValue],
    ) -> Result<Option<Unwrapped<DynSolValue>>, SdkError> {
        let function = Function::parse(signature)
            .map_err(|e| SdkError::Abi(format!("Invalid signature '{signature}': {e}")))?;
        let calldata = function.abi_encode_input(args)?;
        let data = self.static_call(Bytes::from(calldata)).await?;
        let outputs = function.abi_decode_output(&data)?;
        Ok(result::unwrap(outputs))
    }

    /// Encode `call` and hand it to the executor.
    pub async fn send<C: SolCall>(
        &self,
        call: C,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = ContractCall::new(self.address, call.abi_encode(), C::SIGNATURE);
        self.executor.execute(call, options, self.optimize).await
    }

    /// Hand pre-encoded calldata to the executor.
    pub async fn send_raw(
        &self,
        calldata: Bytes,
        signature: &'static str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = ContractCall::new(self.address, calldata, signature);
        self.executor.execute(call, options, self.optimize).await
    }

    async fn static_call(&self, calldata: Bytes) -> Result<Bytes, SdkError> {
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(calldata.into());
        self.transport.call(tx).await
    }
}

impl std::fmt::Debug for ContractBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractBinding")
            .field("address", &self.address)
            .field("optimize", &self.optimize)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared doubles for wrapper tests.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use alloy::primitives::{Bytes, TxKind};
    use alloy::rpc::types::TransactionRequest;
    use async_trait::async_trait;

    use super::*;
    use crate::executor::RecordingExecutor;

    /// Answers `eth_call` from a selector → return data table.
    #[derive(Default)]
    pub struct CannedReads {
        responses: Mutex<HashMap<[u8; 4], Bytes>>,
        pub seen: Mutex<Vec<TransactionRequest>>,
    }

    impl CannedReads {
        pub fn respond(&self, selector: [u8; 4], data: impl Into<Bytes>) {
            self.responses.lock().unwrap().insert(selector, data.into());
        }
    }

    #[async_trait]
    impl ChainTransport for CannedReads {
        async fn estimate_gas(&self, _tx: TransactionRequest) -> Result<u64, SdkError> {
            Ok(21_000)
        }

        async fn call(&self, tx: TransactionRequest) -> Result<Bytes, SdkError> {
            let input = tx.input.input().cloned().unwrap_or_default();
            self.seen.lock().unwrap().push(tx);
            let selector: [u8; 4] = input
                .get(..4)
                .and_then(|s| s.try_into().ok())
                .ok_or_else(|| SdkError::InvalidArgument("calldata too short".into()))?;
            self.responses
                .lock()
                .unwrap()
                .get(&selector)
                .cloned()
                .ok_or_else(|| SdkError::Transport("no canned response".into()))
        }

        async fn send_transaction(
            &self,
            _tx: TransactionRequest,
        ) -> Result<TransactionHandle, SdkError> {
            Err(SdkError::Transport("reads only".into()))
        }
    }

    pub fn binding(address: Address) -> (ContractBinding, Arc<CannedReads>, Arc<RecordingExecutor>) {
        let reads = Arc::new(CannedReads::default());
        let executor = Arc::new(RecordingExecutor::new());
        let binding = ContractBinding::new(address, reads.clone(), executor.clone());
        (binding, reads, executor)
    }

    pub fn target(tx: &TransactionRequest) -> Option<Address> {
        match tx.to {
            Some(TxKind::Call(to)) => Some(to),
            _ => None,
        }
    }
}
