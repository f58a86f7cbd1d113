//! Periodic health reports.

use std::sync::Arc;

use crate::{
	models::AlertChannel,
	services::{blockwatcher::ChainScanner, notification::NotificationRouter},
};

/// Kind of health report and where it goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthReport {
	/// Heights plus blocks tracked since the previous hourly report
	Hourly,
	/// Heights only
	Daily,
}

impl HealthReport {
	pub fn header(&self) -> &'static str {
		match self {
			Self::Hourly => "Hourly Health Check",
			Self::Daily => "Daily Health Check",
		}
	}

	pub fn channel(&self) -> AlertChannel {
		match self {
			Self::Hourly => AlertChannel::Secondary,
			Self::Daily => AlertChannel::Primary,
		}
	}

	/// Builds the report text
	///
	/// The hourly report resets each chain's processed-blocks counter.
	pub async fn render(&self, scanners: &[Arc<dyn ChainScanner>]) -> String {
		let mut message = format!("{}\n", self.header());

		for scanner in scanners {
			let line = match self {
				Self::Hourly => {
					let progress = scanner.take_progress().await;
					format!(
						"> `{}` - latest tracked block height: {}, blocks tracked in the past period: {}\n",
						scanner.chain_name(),
						progress.latest_scanned_height,
						progress.blocks_processed_since_last_report
					)
				}
				Self::Daily => {
					let progress = scanner.progress().await;
					format!(
						"> `{}` - latest tracked block height: {}\n",
						scanner.chain_name(),
						progress.latest_scanned_height
					)
				}
			};
			message.push_str(&line);
		}

		message
	}

	/// Renders the report and sends it, never escalated
	pub async fn send<R: NotificationRouter + ?Sized>(
		&self,
		scanners: &[Arc<dyn ChainScanner>],
		router: &R,
	) -> bool {
		let message = self.render(scanners).await;
		router.send(self.channel(), &message, false).await
	}
}
