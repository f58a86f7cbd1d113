//! Core blockchain client interface.
//!
//! This module defines the common interface every chain client follows, so the
//! block watcher can track heights without knowing the transport underneath.

use async_trait::async_trait;

use crate::services::blockchain::BlockChainError;

/// Defines the core interface for blockchain clients
#[async_trait]
pub trait BlockChainClient: Send + Sync {
	/// Retrieves the latest block number from the blockchain
	///
	/// # Returns
	/// * `Result<u64, BlockChainError>` - The latest block number or an error
	async fn get_latest_block_number(&self) -> Result<u64, BlockChainError>;
}
