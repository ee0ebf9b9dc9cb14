pub mod adapters;
pub mod binding;
pub mod chain;
pub mod client;
pub mod config;
pub mod contracts;
pub mod dispatch;
pub mod erc20;
pub mod error;
pub mod exception;
pub mod executor;
pub mod gas;
pub mod lender;
pub mod market_place;
pub mod redeemer;
pub mod result;
pub mod strategy;
pub mod strategy_router;
pub mod transport;
pub mod types;

pub use client::IlluminateClient;
pub use config::SdkConfig;
pub use dispatch::{LendRequest, RedeemRequest};
pub use error::SdkError;
pub use executor::{RecordingExecutor, SimulatingExecutor, TransactionExecutor};
pub use transport::{ChainTransport, RpcTransport};
pub use types::*;
