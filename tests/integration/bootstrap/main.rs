use mockito::Matcher;
use serde_json::json;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tempfile::TempDir;

use crate::integration::mocks::{MockEvmClientTrait, RecordingRouter};
use defi_notifier::{
	bootstrap::{announce_startup, build_chain_handles, initialize_scanners, resolve_start_height},
	models::{ChainFamily, ConfigError, StartPosition},
	services::{
		blockwatcher::{BlockStorage, FileBlockStorage},
		decoder::EventClassifier,
		notification::{SlackNotifier, SlackRouter},
	},
	utils::{
		tests::builders::config::{AppConfigBuilder, WatchTargetBuilder},
		HttpRetryConfig, STARTUP_MESSAGE,
	},
};

const TRON_USDT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

fn fast_retry() -> HttpRetryConfig {
	HttpRetryConfig {
		max_retries: 0,
		initial_backoff: Duration::from_millis(1),
		max_backoff: Duration::from_millis(2),
		..HttpRetryConfig::webhook()
	}
}

#[test]
fn test_build_chain_handles() {
	let config = AppConfigBuilder::new()
		.tron_entity(Some(TRON_USDT))
		.watch_list(vec![
			WatchTargetBuilder::new().chain("Ethereum").build(),
			WatchTargetBuilder::new()
				.chain("tron")
				.endpoint("https://api.trongrid.io/jsonrpc")
				.explorer("https://tronscan.org/#/transaction")
				.contracts(vec![TRON_USDT])
				.build(),
		])
		.build();

	let chains = build_chain_handles(&config).unwrap();

	assert_eq!(chains.len(), 2);
	assert_eq!(chains[0].name, "ethereum");
	assert_eq!(chains[0].family, ChainFamily::Evm);
	assert_eq!(chains[0].topics, EventClassifier::monitored_topics());
	assert_eq!(chains[1].family, ChainFamily::Tron);
	assert_eq!(chains[1].entity_of_interest, chains[1].contracts[0]);
}

#[test]
fn test_build_chain_handles_requires_entity_for_family() {
	let config = AppConfigBuilder::new()
		.tron_entity(None)
		.watch_list(vec![WatchTargetBuilder::new()
			.chain("tron")
			.contracts(vec![TRON_USDT])
			.build()])
		.build();

	assert!(matches!(
		build_chain_handles(&config),
		Err(ConfigError::ValidationError(_))
	));
}

#[tokio::test]
async fn test_resolve_start_height_current() {
	let mut client = MockEvmClientTrait::new();
	client
		.expect_get_latest_block_number()
		.times(1)
		.returning(|| Ok(2500));

	assert_eq!(
		resolve_start_height("ethereum", &client, None).await.unwrap(),
		2500
	);
}

#[tokio::test]
async fn test_resolve_start_height_from_checkpoint() {
	let temp_dir = TempDir::new().unwrap();
	let storage = FileBlockStorage::new(temp_dir.path().to_path_buf());
	storage
		.save_last_processed_block("ethereum", 2099)
		.await
		.unwrap();

	let mut client = MockEvmClientTrait::new();
	client.expect_get_latest_block_number().times(0);

	let storage: &dyn BlockStorage = &storage;
	assert_eq!(
		resolve_start_height("ethereum", &client, Some(storage))
			.await
			.unwrap(),
		2100
	);
}

#[tokio::test]
async fn test_resolve_start_height_without_checkpoint_falls_back() {
	let temp_dir = TempDir::new().unwrap();
	let storage = FileBlockStorage::new(temp_dir.path().to_path_buf());

	let mut client = MockEvmClientTrait::new();
	client
		.expect_get_latest_block_number()
		.times(1)
		.returning(|| Ok(42));

	let storage: &dyn BlockStorage = &storage;
	assert_eq!(
		resolve_start_height("ethereum", &client, Some(storage))
			.await
			.unwrap(),
		42
	);
}

#[tokio::test]
async fn test_initialize_scanners_connects_to_nodes() {
	let mut node = mockito::Server::new_async().await;
	let _mock = node
		.mock("POST", "/")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x64"}"#)
		.create_async()
		.await;

	let temp_dir = TempDir::new().unwrap();
	let config = AppConfigBuilder::new()
		.start_position(StartPosition::Checkpoint)
		.checkpoint_dir(PathBuf::from(temp_dir.path()))
		.watch_list(vec![WatchTargetBuilder::new().endpoint(&node.url()).build()])
		.build();
	let chains = build_chain_handles(&config).unwrap();

	let scanners = initialize_scanners(&config, chains, Arc::new(RecordingRouter::default()))
		.await
		.unwrap();

	assert_eq!(scanners.len(), 1);
	assert_eq!(scanners[0].chain_name(), "ethereum");
	assert_eq!(scanners[0].progress().await.latest_scanned_height, 100);
}

#[tokio::test]
async fn test_announce_startup() {
	let mut server = mockito::Server::new_async().await;
	let probe = server
		.mock("POST", "/main")
		.with_status(400)
		.with_body("no_text")
		.create_async()
		.await;
	let started = server
		.mock("POST", "/backup")
		.match_body(Matcher::Json(json!({ "text": STARTUP_MESSAGE })))
		.with_status(200)
		.create_async()
		.await;

	let router = SlackRouter::new(
		SlackNotifier::with_retry_config(format!("{}/main", server.url()), &fast_retry()).unwrap(),
		SlackNotifier::with_retry_config(format!("{}/backup", server.url()), &fast_retry())
			.unwrap(),
	);

	announce_startup(&router).await.unwrap();
	probe.assert_async().await;
	started.assert_async().await;
}

#[tokio::test]
async fn test_announce_startup_fails_on_unreachable_main_webhook() {
	let router = SlackRouter::new(
		SlackNotifier::with_retry_config("http://127.0.0.1:1/main", &fast_retry()).unwrap(),
		SlackNotifier::with_retry_config("http://127.0.0.1:1/backup", &fast_retry()).unwrap(),
	);

	assert!(announce_startup(&router).await.is_err());
}

#[tokio::test]
async fn test_announce_startup_fails_on_rejected_announcement() {
	let mut server = mockito::Server::new_async().await;
	let _probe = server
		.mock("POST", "/main")
		.with_status(400)
		.create_async()
		.await;
	let _rejected = server
		.mock("POST", "/backup")
		.with_status(403)
		.create_async()
		.await;

	let router = SlackRouter::new(
		SlackNotifier::with_retry_config(format!("{}/main", server.url()), &fast_retry()).unwrap(),
		SlackNotifier::with_retry_config(format!("{}/backup", server.url()), &fast_retry())
			.unwrap(),
	);

	assert!(announce_startup(&router).await.is_err());
}
