//! Application configuration loading and validation.
//!
//! The whole service is described by one JSON document. String values may
//! reference environment variables as `${NAME}`; they are substituted before
//! the document is deserialized, so secrets such as webhook URLs can stay out
//! of the file.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
	collections::HashSet,
	path::{Path, PathBuf},
};

use crate::{
	models::{config::error::ConfigError, ChainFamily, ConfigLoader},
	services::decoder::AddressCodec,
	utils::validate_cron_expression,
};

lazy_static! {
	static ref ENV_PLACEHOLDER: Regex =
		Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder regex");
}

/// Slack incoming webhooks for the two alert channels
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SlackConfig {
	/// Primary channel, receives escalated alerts and the daily report
	pub main_webhook: String,
	/// Secondary channel, receives routine alerts and the hourly report
	pub backup_webhook: String,
}

/// Address whose involvement escalates an alert, per chain family
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EntityOfInterest {
	#[serde(default)]
	pub evm: Option<String>,
	#[serde(default)]
	pub tron: Option<String>,
}

impl EntityOfInterest {
	pub fn for_family(&self, family: ChainFamily) -> Option<&str> {
		match family {
			ChainFamily::Evm => self.evm.as_deref(),
			ChainFamily::Tron => self.tron.as_deref(),
		}
	}
}

/// Cron expressions (with a seconds field) driving the scheduler
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
	pub scan: String,
	pub hourly_report: String,
	pub daily_report: String,
}

impl Default for ScheduleConfig {
	fn default() -> Self {
		Self {
			scan: "0 * * * * *".to_string(),
			hourly_report: "0 0 * * * *".to_string(),
			daily_report: "0 0 4 * * *".to_string(),
		}
	}
}

/// Where a chain's tracked height starts on boot
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StartPosition {
	/// The node's current height
	#[default]
	Current,
	/// The last checkpointed height, or the current height if none was saved
	Checkpoint,
}

/// One watched chain
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct WatchTarget {
	pub chain: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub family: Option<ChainFamily>,
	pub endpoint: String,
	pub explorer: String,
	pub contracts: Vec<String>,
}

impl WatchTarget {
	/// Explicit family, or the one implied by the chain name
	pub fn family(&self) -> ChainFamily {
		self.family
			.unwrap_or_else(|| ChainFamily::from_chain_name(&self.chain))
	}
}

fn default_checkpoint_dir() -> PathBuf {
	PathBuf::from("data")
}

/// Top-level configuration document
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppConfig {
	pub slack: SlackConfig,
	#[serde(default)]
	pub entity_of_interest: EntityOfInterest,
	#[serde(default)]
	pub schedule: ScheduleConfig,
	#[serde(default)]
	pub start_position: StartPosition,
	#[serde(default = "default_checkpoint_dir")]
	pub checkpoint_dir: PathBuf,
	pub watch_list: Vec<WatchTarget>,
}

impl AppConfig {
	/// Parses a JSON document, substituting `${VAR}` placeholders first
	pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
		let document: Value = serde_json::from_str(raw)?;
		let resolved = resolve_env_placeholders(document)?;
		let config: AppConfig = serde_json::from_value(resolved)?;
		Ok(config)
	}

	/// Families that at least one watched chain belongs to
	pub fn families_in_use(&self) -> HashSet<ChainFamily> {
		self.watch_list.iter().map(WatchTarget::family).collect()
	}
}

impl ConfigLoader for AppConfig {
	/// Load the configuration from a specific file
	///
	/// The file is parsed, environment placeholders are resolved and the
	/// result is validated before being returned.
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		if !Self::is_json_file(path) {
			return Err(ConfigError::file_error(format!(
				"configuration file must be a .json file: {}",
				path.display()
			)));
		}

		let raw = std::fs::read_to_string(path)?;
		let config = Self::from_json_str(&raw)?;

		config.validate()?;

		Ok(config)
	}

	/// Validate the configuration
	///
	/// Checks that:
	/// - Both webhooks and every endpoint and explorer are http(s) URLs
	/// - The watch list is non-empty and chain names are unique
	/// - Every contract decodes for its chain's family
	/// - Each family in use has a decodable entity of interest
	/// - All schedules are valid cron expressions
	fn validate(&self) -> Result<(), ConfigError> {
		require_http_url("slack.main_webhook", &self.slack.main_webhook)?;
		require_http_url("slack.backup_webhook", &self.slack.backup_webhook)?;

		if self.watch_list.is_empty() {
			return Err(ConfigError::validation_error("watch_list must not be empty"));
		}

		let mut seen = HashSet::new();
		for target in &self.watch_list {
			if target.chain.trim().is_empty() {
				return Err(ConfigError::validation_error("chain name must not be empty"));
			}
			if !seen.insert(target.chain.to_lowercase()) {
				return Err(ConfigError::validation_error(format!(
					"duplicate chain name: {}",
					target.chain
				)));
			}

			require_http_url(&format!("{}.endpoint", target.chain), &target.endpoint)?;
			require_http_url(&format!("{}.explorer", target.chain), &target.explorer)?;

			if target.contracts.is_empty() {
				return Err(ConfigError::validation_error(format!(
					"{} has no contracts to watch",
					target.chain
				)));
			}

			let family = target.family();
			for contract in &target.contracts {
				AddressCodec::decode(contract, family).map_err(|e| {
					ConfigError::validation_error(format!("{}: {}", target.chain, e))
				})?;
			}
		}

		for family in self.families_in_use() {
			let entity = self.entity_of_interest.for_family(family).ok_or_else(|| {
				ConfigError::validation_error(format!(
					"entity_of_interest.{} is required by the watch list",
					family
				))
			})?;
			AddressCodec::decode(entity, family).map_err(|e| {
				ConfigError::validation_error(format!("entity_of_interest.{}: {}", family, e))
			})?;
		}

		for (name, expression) in [
			("schedule.scan", &self.schedule.scan),
			("schedule.hourly_report", &self.schedule.hourly_report),
			("schedule.daily_report", &self.schedule.daily_report),
		] {
			validate_cron_expression(expression)
				.map_err(|e| ConfigError::validation_error(format!("{}: {}", name, e)))?;
		}

		Ok(())
	}
}

fn require_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
	if value.starts_with("http://") || value.starts_with("https://") {
		Ok(())
	} else {
		Err(ConfigError::validation_error(format!(
			"{} must start with http:// or https://",
			field
		)))
	}
}

/// Replaces `${VAR}` in every string value of the document
fn resolve_env_placeholders(value: Value) -> Result<Value, ConfigError> {
	match value {
		Value::String(s) => resolve_string(&s).map(Value::String),
		Value::Array(items) => items
			.into_iter()
			.map(resolve_env_placeholders)
			.collect::<Result<Vec<_>, _>>()
			.map(Value::Array),
		Value::Object(map) => map
			.into_iter()
			.map(|(k, v)| resolve_env_placeholders(v).map(|v| (k, v)))
			.collect::<Result<serde_json::Map<_, _>, _>>()
			.map(Value::Object),
		other => Ok(other),
	}
}

fn resolve_string(raw: &str) -> Result<String, ConfigError> {
	let mut resolved = String::with_capacity(raw.len());
	let mut last = 0;

	for captures in ENV_PLACEHOLDER.captures_iter(raw) {
		let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
			continue;
		};
		let value = std::env::var(name.as_str()).map_err(|_| {
			ConfigError::environment_error(format!("{} is not set", name.as_str()))
		})?;
		resolved.push_str(&raw[last..whole.start()]);
		resolved.push_str(&value);
		last = whole.end();
	}

	resolved.push_str(&raw[last..]);
	Ok(resolved)
}
