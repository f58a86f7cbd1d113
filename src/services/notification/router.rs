//! Channel routing on top of two notifiers.

use async_trait::async_trait;

use crate::{
	models::{AlertChannel, SlackConfig},
	services::notification::{NotificationError, NotificationRouter, Notifier, SlackNotifier},
	utils::ESCALATION_SUFFIX,
};

/// Routes `primary` to the main webhook and `secondary` to the backup webhook
pub struct SlackRouter<N: Notifier = SlackNotifier> {
	primary: N,
	secondary: N,
}

impl SlackRouter<SlackNotifier> {
	/// Builds both notifiers from configuration
	pub fn from_config(config: &SlackConfig) -> Result<Self, NotificationError> {
		Ok(Self::new(
			SlackNotifier::new(config.main_webhook.clone())?,
			SlackNotifier::new(config.backup_webhook.clone())?,
		))
	}
}

impl<N: Notifier> SlackRouter<N> {
	pub fn new(primary: N, secondary: N) -> Self {
		Self { primary, secondary }
	}

	fn notifier(&self, channel: AlertChannel) -> &N {
		match channel {
			AlertChannel::Primary => &self.primary,
			AlertChannel::Secondary => &self.secondary,
		}
	}

	/// Checks that the main webhook is reachable
	pub async fn probe_primary(&self) -> Result<(), NotificationError> {
		self.primary.probe().await
	}
}

/// Appends the escalation suffix when requested
pub(crate) fn with_escalation(message: &str, escalate: bool) -> String {
	if escalate {
		format!("{}{}", message, ESCALATION_SUFFIX)
	} else {
		message.to_string()
	}
}

#[async_trait]
impl<N: Notifier> NotificationRouter for SlackRouter<N> {
	async fn send(&self, channel: AlertChannel, message: &str, escalate: bool) -> bool {
		let text = with_escalation(message, escalate);

		match self.notifier(channel).notify(&text).await {
			Ok(()) => true,
			Err(e) => {
				tracing::warn!(%channel, error = %e, "Failed to send message to Slack channel");
				false
			}
		}
	}
}
