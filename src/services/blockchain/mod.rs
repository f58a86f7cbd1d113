//! Blockchain client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for interacting with
//! blockchain nodes. Includes:
//!
//! - Generic blockchain client trait
//! - EVM JSON-RPC client (also used for Tron's Ethereum-compatible endpoint)
//! - HTTP transport with retries
//! - Error handling for blockchain operations

mod client;
mod clients;
mod error;
mod transports;

pub use client::BlockChainClient;
pub use clients::{EvmClient, EvmClientTrait};
pub use error::BlockChainError;
pub use transports::{
	BlockchainTransport, EVMTransportClient, HttpTransportClient, TransientErrorRetryStrategy,
};
