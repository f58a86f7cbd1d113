//! EVM-compatible blockchain client implementation.
//!
//! This module provides functionality to interact with Ethereum and other EVM-compatible
//! nodes (including Tron's JSON-RPC gateway), supporting latest height lookup,
//! filtered log retrieval and transaction input lookup.

use alloy::primitives::{Bytes, B256};
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
	models::{ChainHandle, EVMLog, EVMLogFilter, EVMTransaction},
	services::blockchain::{
		client::BlockChainClient,
		transports::{BlockchainTransport, EVMTransportClient},
		BlockChainError,
	},
};

/// Client implementation for Ethereum Virtual Machine (EVM) compatible blockchains
///
/// Provides high-level access to EVM blockchain data through a JSON-RPC
/// transport layer.
#[derive(Clone)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	http_client: T,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(http_client: T) -> Self {
		Self { http_client }
	}
}

impl EvmClient<EVMTransportClient> {
	/// Creates a new EVM client instance
	///
	/// # Arguments
	/// * `chain` - Chain handle containing the RPC endpoint
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or connection error
	pub async fn new(chain: &ChainHandle) -> Result<Self, BlockChainError> {
		let http_client = EVMTransportClient::new(chain).await?;
		Ok(Self::new_with_transport(http_client))
	}
}

/// Extended functionality specific to EVM-compatible blockchains
#[async_trait]
pub trait EvmClientTrait: BlockChainClient {
	/// Retrieves logs for a range of blocks
	///
	/// # Arguments
	/// * `from_block` - Starting block number (inclusive)
	/// * `to_block` - Ending block number (inclusive)
	/// * `filter` - Contract and topic restrictions
	///
	/// # Returns
	/// * `Result<Vec<EVMLog>, BlockChainError>` - Matching logs in node order or error
	async fn get_logs_for_blocks(
		&self,
		from_block: u64,
		to_block: u64,
		filter: &EVMLogFilter,
	) -> Result<Vec<EVMLog>, BlockChainError>;

	/// Retrieves the call data of a transaction by its hash
	///
	/// # Arguments
	/// * `transaction_hash` - The hash of the transaction to look up
	///
	/// # Returns
	/// * `Result<Bytes, BlockChainError>` - Transaction input or error
	async fn get_transaction_input(&self, transaction_hash: B256)
		-> Result<Bytes, BlockChainError>;
}

/// Extracts the "result" field from a JSON-RPC response
fn extract_result(response: &Value) -> Result<&Value, BlockChainError> {
	response
		.get("result")
		.ok_or_else(|| BlockChainError::request_error("Missing 'result' field".to_string()))
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> EvmClientTrait for EvmClient<T> {
	/// Retrieves logs within the specified block range
	///
	/// # Errors
	/// - Returns `BlockChainError::RequestError` if the response cannot be parsed
	async fn get_logs_for_blocks(
		&self,
		from_block: u64,
		to_block: u64,
		filter: &EVMLogFilter,
	) -> Result<Vec<EVMLog>, BlockChainError> {
		let params = json!([filter.to_rpc_params(from_block, to_block)])
			.as_array()
			.ok_or_else(|| {
				BlockChainError::internal_error(
					"Failed to create JSON-RPC params array".to_string(),
				)
			})?
			.to_vec();

		let response = self
			.http_client
			.send_raw_request("eth_getLogs", Some(params))
			.await?;

		let logs_data = extract_result(&response)?;

		serde_json::from_value(logs_data.clone())
			.map_err(|e| BlockChainError::request_error(format!("Failed to parse logs: {}", e)))
	}

	/// Retrieves a transaction's call data by hash
	///
	/// # Errors
	/// - Returns `BlockChainError::TransactionNotFound` if the node returns `null`
	/// - Returns `BlockChainError::RequestError` if the response cannot be parsed
	async fn get_transaction_input(
		&self,
		transaction_hash: B256,
	) -> Result<Bytes, BlockChainError> {
		let params = json!([transaction_hash.to_string()])
			.as_array()
			.ok_or_else(|| {
				BlockChainError::internal_error(
					"Failed to create JSON-RPC params array".to_string(),
				)
			})?
			.to_vec();

		let response = self
			.http_client
			.send_raw_request("eth_getTransactionByHash", Some(params))
			.await?;

		let transaction_data = extract_result(&response)?;

		// Handle null response case
		if transaction_data.is_null() {
			return Err(BlockChainError::transaction_not_found(
				transaction_hash.to_string(),
			));
		}

		let transaction: EVMTransaction = serde_json::from_value(transaction_data.clone())
			.map_err(|e| {
				BlockChainError::request_error(format!("Failed to parse transaction: {}", e))
			})?;

		Ok(transaction.input)
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> BlockChainClient for EvmClient<T> {
	/// Retrieves the latest block number
	async fn get_latest_block_number(&self) -> Result<u64, BlockChainError> {
		let response = self
			.http_client
			.send_raw_request::<Value>("eth_blockNumber", None)
			.await?;

		let hex_str = extract_result(&response)?
			.as_str()
			.ok_or_else(|| BlockChainError::request_error("Block number is not a string"))?;

		// Parse hex string to u64
		u64::from_str_radix(hex_str.trim_start_matches("0x"), 16).map_err(|e| {
			BlockChainError::request_error(format!("Failed to parse block number: {}", e))
		})
	}
}
