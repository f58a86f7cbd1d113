//! Notification delivery.
//!
//! Alerts are posted to two Slack incoming webhooks: the main channel
//! (`primary`) and the backup channel (`secondary`). The scanner only sees the
//! [`NotificationRouter`] boundary and never the concrete notifier.

use async_trait::async_trait;

mod error;
mod message;
mod router;
mod slack;

pub use error::NotificationError;
pub use message::{format_tx_url, render_alert};
pub use router::SlackRouter;
pub use slack::SlackNotifier;

use crate::models::AlertChannel;

/// Interface for a single notification destination
#[async_trait]
pub trait Notifier: Send + Sync {
	/// Sends a message
	///
	/// # Arguments
	/// * `message` - The formatted message to send
	///
	/// # Returns
	/// * `Result<(), NotificationError>` - Success or error
	async fn notify(&self, message: &str) -> Result<(), NotificationError>;

	/// Checks that the destination is reachable without posting a message
	async fn probe(&self) -> Result<(), NotificationError>;
}

/// Delivers rendered messages on the primary or secondary channel
#[async_trait]
pub trait NotificationRouter: Send + Sync {
	/// Sends `message`, appending the escalation suffix when `escalate` is set
	///
	/// Returns `false` if delivery failed. Failures are logged and never panic.
	async fn send(&self, channel: AlertChannel, message: &str, escalate: bool) -> bool;
}
