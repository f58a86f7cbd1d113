use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination tag understood by the notification router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertChannel {
	/// Main channel, watched by operators
	Primary,
	/// Backup channel for routine events and health reports
	Secondary,
}

impl fmt::Display for AlertChannel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primary => write!(f, "primary"),
			Self::Secondary => write!(f, "secondary"),
		}
	}
}

/// Outcome of processing one log: what to say and where to say it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDecision {
	pub chain: String,
	pub message: String,
	pub escalate: bool,
	pub channel: AlertChannel,
}

impl AlertDecision {
	/// Routes a message according to whether the entity of interest is involved.
	///
	/// Involvement always means `primary` with escalation, anything else goes
	/// to `secondary` unescalated.
	pub fn route(chain: impl Into<String>, message: impl Into<String>, involves_entity: bool) -> Self {
		let channel = if involves_entity {
			AlertChannel::Primary
		} else {
			AlertChannel::Secondary
		};

		Self {
			chain: chain.into(),
			message: message.into(),
			escalate: involves_entity,
			channel,
		}
	}
}
