use mockito::Matcher;
use serde_json::json;
use std::time::Duration;
use tracing_test::traced_test;

use defi_notifier::{
	models::{AlertChannel, SlackConfig},
	services::notification::{NotificationRouter, SlackNotifier, SlackRouter},
	utils::HttpRetryConfig,
};

fn fast_retry() -> HttpRetryConfig {
	HttpRetryConfig {
		max_retries: 1,
		initial_backoff: Duration::from_millis(1),
		max_backoff: Duration::from_millis(2),
		..HttpRetryConfig::webhook()
	}
}

#[tokio::test]
async fn test_router_maps_channels_to_webhooks() {
	let mut server = mockito::Server::new_async().await;
	let main = server
		.mock("POST", "/main")
		.match_body(Matcher::Json(json!({
			"text": "alert\nPlease check this! <!channel>"
		})))
		.with_status(200)
		.create_async()
		.await;
	let backup = server
		.mock("POST", "/backup")
		.match_body(Matcher::Json(json!({ "text": "routine" })))
		.with_status(200)
		.create_async()
		.await;

	let router = SlackRouter::from_config(&SlackConfig {
		main_webhook: format!("{}/main", server.url()),
		backup_webhook: format!("{}/backup", server.url()),
	})
	.unwrap();

	assert!(router.send(AlertChannel::Primary, "alert", true).await);
	assert!(router.send(AlertChannel::Secondary, "routine", false).await);

	main.assert_async().await;
	backup.assert_async().await;
}

#[tokio::test]
#[traced_test]
async fn test_router_reports_failed_delivery() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/backup")
		.with_status(404)
		.with_body("no_service")
		.create_async()
		.await;

	let router = SlackRouter::new(
		SlackNotifier::with_retry_config(format!("{}/main", server.url()), &fast_retry()).unwrap(),
		SlackNotifier::with_retry_config(format!("{}/backup", server.url()), &fast_retry())
			.unwrap(),
	);

	assert!(!router.send(AlertChannel::Secondary, "routine", false).await);
	mock.assert_async().await;
	assert!(logs_contain("Failed to send message to Slack channel"));
}
