//! Slack notification implementation.
//!
//! Provides functionality to send plain-text messages to Slack channels
//! via incoming webhooks.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use std::time::Duration;

use crate::{
	services::{
		blockchain::TransientErrorRetryStrategy,
		notification::{NotificationError, Notifier},
	},
	utils::{create_retryable_http_client, HttpRetryConfig},
};

/// Implementation of Slack notifications via webhooks
#[derive(Debug, Clone)]
pub struct SlackNotifier {
	/// Slack webhook URL for message delivery
	webhook_url: String,
	/// HTTP client for webhook requests, with retries on transient errors
	client: ClientWithMiddleware,
}

/// Represents a formatted Slack message
#[derive(Serialize)]
struct SlackMessage<'a> {
	/// The formatted text to send to Slack
	text: &'a str,
}

impl SlackNotifier {
	/// Creates a new Slack notifier with the webhook retry policy
	///
	/// # Arguments
	/// * `webhook_url` - Slack webhook URL
	pub fn new(webhook_url: impl Into<String>) -> Result<Self, NotificationError> {
		Self::with_retry_config(webhook_url, &HttpRetryConfig::webhook())
	}

	/// Creates a new Slack notifier with a custom retry policy
	pub fn with_retry_config(
		webhook_url: impl Into<String>,
		retry_config: &HttpRetryConfig,
	) -> Result<Self, NotificationError> {
		let base_client = reqwest::ClientBuilder::new()
			.timeout(Duration::from_secs(10))
			.connect_timeout(Duration::from_secs(5))
			.build()
			.map_err(|e| {
				NotificationError::internal_error(format!("Failed to build HTTP client: {}", e))
			})?;

		Ok(Self {
			webhook_url: webhook_url.into(),
			client: create_retryable_http_client(
				retry_config,
				base_client,
				Some(TransientErrorRetryStrategy),
			),
		})
	}

	pub fn webhook_url(&self) -> &str {
		&self.webhook_url
	}
}

#[async_trait]
impl Notifier for SlackNotifier {
	/// Posts `{"text": message}` to the webhook
	///
	/// # Errors
	/// - `NetworkError` if the request could not be sent
	/// - `DeliveryError` if Slack answered with anything but 200
	async fn notify(&self, message: &str) -> Result<(), NotificationError> {
		let response = self
			.client
			.post(self.webhook_url.as_str())
			.json(&SlackMessage { text: message })
			.send()
			.await?;

		let status = response.status();
		if status.as_u16() != 200 {
			let body = response.text().await.unwrap_or_default();
			return Err(NotificationError::delivery_error(status.as_u16(), body));
		}

		Ok(())
	}

	/// Posts an empty body to the webhook
	///
	/// Slack rejects it with `400 no_text`, which still proves the host is up
	/// and the URL is routable. Only transport failures count as unreachable.
	async fn probe(&self) -> Result<(), NotificationError> {
		let response = self.client.post(self.webhook_url.as_str()).send().await?;
		tracing::debug!(
			status = response.status().as_u16(),
			"Slack webhook probe answered"
		);
		Ok(())
	}
}
