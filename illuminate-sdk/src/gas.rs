//! Gas limit padding for auto-estimated transactions.

use tracing::{debug, warn};

use crate::error::SdkError;
use crate::transport::ChainTransport;
use crate::types::{CallOptions, ContractCall};

/// Default safety margin added on top of the node's estimate.
pub const DEFAULT_GAS_MARGIN_PERCENT: u64 = 10;

/// Pads node gas estimates by a fixed percentage.
///
/// Node estimates routinely come in under what the transaction actually
/// burns, so the estimate is raised before it becomes the gas limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasOptimizer {
    margin_percent: u64,
}

impl GasOptimizer {
    pub fn new(margin_percent: u64) -> Self {
        Self { margin_percent }
    }

    pub fn margin_percent(&self) -> u64 {
        self.margin_percent
    }

    /// Apply the margin to a raw estimate. The fractional remainder is
    /// truncated, and the result is always strictly above a non-zero estimate.
    pub fn apply_margin(&self, estimate: u64) -> u64 {
        if estimate == 0 {
            return 0;
        }
        let padded = (estimate as u128 * (100 + self.margin_percent) as u128) / 100;
        let padded = u64::try_from(padded).unwrap_or(u64::MAX);
        padded.max(estimate.saturating_add(1))
    }

    /// Fill in a padded gas limit for `call`.
    ///
    /// Options that already carry a gas limit are returned untouched and no
    /// estimate is requested. A zero estimate also leaves the limit unset.
    /// Estimation errors are returned as-is so the revert data stays
    /// available to [`crate::exception::parse`].
    pub async fn optimize(
        &self,
        transport: &dyn ChainTransport,
        call: &ContractCall,
        options: CallOptions,
    ) -> Result<CallOptions, SdkError> {
        if options.gas_limit.is_some() {
            return Ok(options);
        }

        let estimate = transport.estimate_gas(call.to_request(&options)).await?;
        if estimate == 0 {
            warn!(signature = call.signature, "node estimated zero gas, leaving limit unset");
            return Ok(options);
        }
        let gas_limit = self.apply_margin(estimate);
        debug!(
            signature = call.signature,
            estimate,
            gas_limit,
            "padded gas estimate"
        );

        Ok(options.with_gas_limit(gas_limit))
    }
}

impl Default for GasOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_GAS_MARGIN_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use alloy::primitives::{Address, Bytes};
    use alloy::rpc::types::TransactionRequest;
    use async_trait::async_trait;

    use crate::error::RpcFailure;
    use crate::types::TransactionHandle;

    struct FixedEstimate {
        estimate: Result<u64, RpcFailure>,
        estimates: AtomicUsize,
    }

    impl FixedEstimate {
        fn ok(estimate: u64) -> Self {
            Self {
                estimate: Ok(estimate),
                estimates: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChainTransport for FixedEstimate {
        async fn estimate_gas(&self, _tx: TransactionRequest) -> Result<u64, SdkError> {
            self.estimates.fetch_add(1, Ordering::SeqCst);
            self.estimate.clone().map_err(SdkError::UnpredictableGas)
        }

        async fn call(&self, _tx: TransactionRequest) -> Result<Bytes, SdkError> {
            unreachable!("optimizer never simulates")
        }

        async fn send_transaction(
            &self,
            _tx: TransactionRequest,
        ) -> Result<TransactionHandle, SdkError> {
            unreachable!("optimizer never sends")
        }
    }

    fn call() -> ContractCall {
        ContractCall::new(Address::repeat_byte(0x42), vec![0x01, 0x02], "ping()")
    }

    #[test]
    fn test_apply_margin() {
        let optimizer = GasOptimizer::default();
        assert_eq!(optimizer.apply_margin(200_000), 220_000);
        assert_eq!(optimizer.apply_margin(21_001), 23_101);
        assert_eq!(optimizer.apply_margin(0), 0);
    }

    #[test]
    fn test_apply_margin_strictly_increases() {
        let optimizer = GasOptimizer::default();
        for estimate in [1u64, 5, 9, 10, 11, 21_000, 30_000_000, u64::MAX - 1] {
            assert!(optimizer.apply_margin(estimate) > estimate, "estimate {estimate}");
        }
    }

    #[test]
    fn test_custom_margin() {
        assert_eq!(GasOptimizer::new(25).apply_margin(100_000), 125_000);
        assert_eq!(GasOptimizer::new(0).apply_margin(100_000), 100_001);
    }

    #[tokio::test]
    async fn test_optimize_sets_padded_limit() {
        let transport = FixedEstimate::ok(200_000);
        let options = CallOptions::default().with_nonce(3);
        let optimized = GasOptimizer::default()
            .optimize(&transport, &call(), options)
            .await
            .unwrap();
        assert_eq!(optimized.gas_limit, Some(220_000));
        assert_eq!(optimized.nonce, Some(3));
        assert_eq!(transport.estimates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_estimate_leaves_limit_unset() {
        let transport = FixedEstimate::ok(0);
        let optimized = GasOptimizer::default()
            .optimize(&transport, &call(), CallOptions::default())
            .await
            .unwrap();
        assert_eq!(optimized.gas_limit, None);
        assert_eq!(transport.estimates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_explicit_gas_limit_skips_estimate() {
        let transport = FixedEstimate::ok(200_000);
        let options = CallOptions::default().with_gas_limit(50_000);
        let optimized = GasOptimizer::default()
            .optimize(&transport, &call(), options.clone())
            .await
            .unwrap();
        assert_eq!(optimized, options);
        assert_eq!(transport.estimates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_estimate_error_propagates_unchanged() {
        let failure = RpcFailure {
            code: 3,
            message: "execution reverted".into(),
            data: Some(serde_json::json!("0x1234")),
        };
        let transport = FixedEstimate {
            estimate: Err(failure.clone()),
            estimates: AtomicUsize::new(0),
        };
        let err = GasOptimizer::default()
            .optimize(&transport, &call(), CallOptions::default())
            .await
            .unwrap_err();
        match err {
            SdkError::UnpredictableGas(f) => assert_eq!(f, failure),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
