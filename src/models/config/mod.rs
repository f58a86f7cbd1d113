//! Configuration loading and validation.
//!
//! The notifier reads a single JSON document describing the Slack webhooks,
//! the entity of interest for each chain family, the schedules and the list
//! of watched chains.

use std::path::Path;

mod app_config;
mod error;

pub use app_config::{
	AppConfig, EntityOfInterest, ScheduleConfig, SlackConfig, StartPosition, WatchTarget,
};
pub use error::ConfigError;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Load and validate a configuration from a specific file
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Validate the loaded configuration
	fn validate(&self) -> Result<(), ConfigError>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
