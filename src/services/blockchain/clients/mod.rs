//! Blockchain client implementations.
//!
//! Both watched chain families are reached over Ethereum-style JSON-RPC, so a
//! single EVM client serves them all.

mod evm {
	pub mod client;
}

pub use evm::client::{EvmClient, EvmClientTrait};
