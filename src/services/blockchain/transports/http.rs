//! HTTP transport implementation for blockchain interactions.
//!
//! This module provides a generic HTTP client implementation for interacting with blockchain nodes
//! via JSON-RPC, supporting:
//! - Configurable retry policies for transient failures
//! - Request and connect timeouts
//! - Connection health checks at construction
//! - JSON-RPC error object detection

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

use crate::{
	services::blockchain::{
		transports::{BlockchainTransport, TransientErrorRetryStrategy},
		BlockChainError,
	},
	utils::{create_retryable_http_client, HttpRetryConfig},
};

/// Basic HTTP transport client for blockchain interactions
///
/// This client provides a foundation for making JSON-RPC requests to a
/// blockchain node with built-in support for:
/// - Connection pooling and reuse
/// - Retries with exponential backoff on transient errors
///
/// The client is thread-safe and can be shared across multiple tasks.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client with retry middleware
	client: ClientWithMiddleware,
	/// The node endpoint
	url: String,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport client and verifies the endpoint answers
	///
	/// # Arguments
	/// * `url` - JSON-RPC endpoint of the node
	/// * `test_connection_payload` - Optional JSON RPC payload to test the connection (default is net_version)
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or connection error
	pub async fn new(
		url: &str,
		test_connection_payload: Option<String>,
	) -> Result<Self, BlockChainError> {
		let parsed = Url::parse(url).map_err(|e| {
			BlockChainError::connection_error(format!("Invalid RPC URL {}: {}", url, e))
		})?;

		let http_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(Duration::from_secs(30))
			.connect_timeout(Duration::from_secs(20))
			.build()
			.map_err(|e| {
				BlockChainError::internal_error(format!("Failed to create HTTP client: {}", e))
			})?;

		let client = create_retryable_http_client(
			&HttpRetryConfig::default(),
			http_client,
			Some(TransientErrorRetryStrategy),
		);

		let test_request = match &test_connection_payload {
			Some(test_payload) => serde_json::from_str(test_payload).map_err(|e| {
				BlockChainError::internal_error(format!(
					"Failed to parse test payload as JSON: {}",
					e
				))
			})?,
			None => json!({
				"jsonrpc": "2.0",
				"id": 1,
				"method": "net_version",
				"params": []
			}),
		};

		// Attempt to connect to the endpoint
		let response = client
			.post(parsed.clone())
			.json(&test_request)
			.send()
			.await
			.map_err(|e| {
				BlockChainError::connection_error(format!("Failed to connect to {}: {}", url, e))
			})?;

		// Check if the response indicates an error status (4xx or 5xx)
		if !response.status().is_success() {
			return Err(BlockChainError::connection_error(format!(
				"Failed to connect to {}: {}",
				url,
				response.status().as_u16()
			)));
		}

		Ok(Self {
			client,
			url: parsed.to_string(),
		})
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	/// Retrieves the RPC endpoint URL
	async fn get_current_url(&self) -> String {
		self.url.clone()
	}

	/// Sends a JSON-RPC request to the blockchain node
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method name to call
	/// * `params` - Optional parameters for the method call
	///
	/// # Returns
	/// * `Result<Value, BlockChainError>` - The full JSON-RPC response object
	///
	/// # Errors
	/// - `ConnectionError` when the request cannot be sent
	/// - `RequestError` on a non-2xx status, an unparsable body or a JSON-RPC `error` object
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, BlockChainError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let request_body = self.customize_request(method, params).await;

		let response = self
			.client
			.post(self.url.as_str())
			.json(&request_body)
			.send()
			.await
			.map_err(|e| {
				BlockChainError::connection_error(format!(
					"Failed to send {} to {}: {}",
					method, self.url, e
				))
			})?;

		let status = response.status();
		if !status.is_success() {
			let error_body = response.text().await.unwrap_or_default();
			return Err(BlockChainError::request_error(format!(
				"{} failed with status {}: {}",
				method, status, error_body
			)));
		}

		let body: Value = response.json().await.map_err(|e| {
			BlockChainError::request_error(format!("Failed to parse JSON response: {}", e))
		})?;

		if let Some(error) = body.get("error") {
			return Err(BlockChainError::request_error(format!(
				"{} returned an error: {}",
				method, error
			)));
		}

		Ok(body)
	}
}
