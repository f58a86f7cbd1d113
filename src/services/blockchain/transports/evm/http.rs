//! EVM transport implementation for blockchain interactions.
//!
//! This module provides a client implementation for interacting with EVM-compatible nodes
//! by wrapping the HttpTransportClient. The connection probe asks for the
//! latest block, so a node that cannot serve it fails at startup.

use serde::Serialize;
use serde_json::Value;

use crate::{
	models::ChainHandle,
	services::blockchain::{
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError,
	},
};

/// A client for interacting with EVM-compatible blockchain nodes
#[derive(Clone, Debug)]
pub struct EVMTransportClient {
	/// The underlying HTTP transport client that handles actual RPC communications
	http_client: HttpTransportClient,
}

impl EVMTransportClient {
	/// Creates a new EVM transport client by initializing an HTTP transport client
	///
	/// # Arguments
	/// * `chain` - Chain handle containing the RPC endpoint
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - A new client instance or connection error
	pub async fn new(chain: &ChainHandle) -> Result<Self, BlockChainError> {
		let test_connection_payload =
			Some(r#"{"id":1,"jsonrpc":"2.0","method":"eth_blockNumber","params":[]}"#.to_string());
		let http_client =
			HttpTransportClient::new(&chain.endpoint, test_connection_payload).await?;
		Ok(Self { http_client })
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for EVMTransportClient {
	/// Gets the RPC URL
	async fn get_current_url(&self) -> String {
		self.http_client.get_current_url().await
	}

	/// Sends a raw JSON-RPC request to the EVM node
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method to call
	/// * `params` - Optional parameters to pass with the request
	///
	/// # Returns
	/// * `Result<Value, BlockChainError>` - The JSON response or error
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, BlockChainError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.http_client.send_raw_request(method, params).await
	}
}
