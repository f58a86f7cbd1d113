use alloy::primitives::{Address, B256};
use mockall::predicate;
use mockito::Server;
use serde_json::{json, Value};

use crate::integration::mocks::MockEVMTransportClient;
use defi_notifier::{
	models::EVMLogFilter,
	services::blockchain::{BlockChainClient, BlockChainError, EvmClient, EvmClientTrait},
	utils::tests::builders::chain::ChainHandleBuilder,
};

fn transport_returning(method: &'static str, response: Value) -> MockEVMTransportClient {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport
		.expect_send_raw_request()
		.with(predicate::eq(method), predicate::always())
		.times(1)
		.returning(move |_, _| Ok(response.clone()));
	mock_transport
}

#[tokio::test]
async fn test_get_latest_block_number() {
	let mock_transport = transport_returning(
		"eth_blockNumber",
		json!({"jsonrpc": "2.0", "id": 1, "result": "0x9c4"}),
	);
	let client = EvmClient::new_with_transport(mock_transport);

	assert_eq!(client.get_latest_block_number().await.unwrap(), 2500);
}

#[tokio::test]
async fn test_get_latest_block_number_invalid_response() {
	let mock_transport = transport_returning("eth_blockNumber", json!({"result": 42}));
	let client = EvmClient::new_with_transport(mock_transport);

	assert!(matches!(
		client.get_latest_block_number().await,
		Err(BlockChainError::RequestError(_))
	));
}

#[tokio::test]
async fn test_get_logs_for_blocks_sends_window_and_filter() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport
		.expect_send_raw_request()
		.withf(|method, params| {
			let Some(params) = params else {
				return false;
			};
			method == "eth_getLogs"
				&& params[0]["fromBlock"] == "0x64"
				&& params[0]["toBlock"] == "0x44b"
				&& params[0]["topics"][0].as_array().map(|t| t.len()) == Some(1)
		})
		.times(1)
		.returning(|_, _| {
			Ok(json!({
				"result": [{
					"address": "0xdac17f958d2ee523a2206206994597c13d831ec7",
					"topics": ["0x42e160154868087d6bfdc0ca23d96a1c1cfa32f1b72ba9ba27b69b98a0d819dc"],
					"data": "0x",
					"transactionHash": "0x0000000000000000000000000000000000000000000000000000000000000001",
					"blockNumber": "0x70"
				}]
			}))
		});

	let client = EvmClient::new_with_transport(mock_transport);
	let filter = EVMLogFilter::new(vec![Address::repeat_byte(0x11)], vec![B256::repeat_byte(0x22)]);
	let logs = client.get_logs_for_blocks(100, 1099, &filter).await.unwrap();

	assert_eq!(logs.len(), 1);
	assert_eq!(logs[0].block_number(), Some(0x70));
}

#[tokio::test]
async fn test_get_logs_for_blocks_missing_result() {
	let mock_transport = transport_returning("eth_getLogs", json!({"jsonrpc": "2.0", "id": 1}));
	let client = EvmClient::new_with_transport(mock_transport);

	let result = client
		.get_logs_for_blocks(1, 2, &EVMLogFilter::default())
		.await;
	assert!(matches!(result, Err(BlockChainError::RequestError(_))));
}

#[tokio::test]
async fn test_get_transaction_input() {
	let hash = B256::repeat_byte(0x7a);
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport
		.expect_send_raw_request()
		.withf(move |method, params| {
			method == "eth_getTransactionByHash"
				&& params.as_ref().map(|p| p[0] == json!(hash.to_string())) == Some(true)
		})
		.times(1)
		.returning(|_, _| {
			Ok(json!({
				"result": {
					"hash": "0x7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a",
					"from": "0x1111111111111111111111111111111111111111",
					"to": "0x2222222222222222222222222222222222222222",
					"input": "0xc6427474"
				}
			}))
		});

	let client = EvmClient::new_with_transport(mock_transport);
	let input = client.get_transaction_input(hash).await.unwrap();

	assert_eq!(input.to_vec(), vec![0xc6, 0x42, 0x74, 0x74]);
}

#[tokio::test]
async fn test_get_transaction_input_not_found() {
	let mock_transport = transport_returning("eth_getTransactionByHash", json!({"result": null}));
	let client = EvmClient::new_with_transport(mock_transport);

	let result = client.get_transaction_input(B256::ZERO).await;
	assert!(matches!(result, Err(BlockChainError::TransactionNotFound(_))));
}

#[tokio::test]
async fn test_new_client_probes_node() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x10"}"#)
		.expect_at_least(2)
		.create_async()
		.await;

	let chain = ChainHandleBuilder::new().endpoint(&server.url()).build();
	let client = EvmClient::new(&chain).await.unwrap();

	assert_eq!(client.get_latest_block_number().await.unwrap(), 16);
	mock.assert();
}

#[tokio::test]
async fn test_new_client_rejects_node_error() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.with_status(401)
		.create_async()
		.await;

	let chain = ChainHandleBuilder::new().endpoint(&server.url()).build();
	let result = EvmClient::new(&chain).await;

	assert!(matches!(result, Err(BlockChainError::ConnectionError(_))));
	mock.assert();
}
