//! Test helper utilities for application configuration
//!
//! - `AppConfigBuilder`: Builder for creating test AppConfig instances
//! - `WatchTargetBuilder`: Builder for creating test WatchTarget instances

use std::path::PathBuf;

use crate::models::{
	AppConfig, ChainFamily, EntityOfInterest, ScheduleConfig, SlackConfig, StartPosition,
	WatchTarget,
};

/// USDT on Ethereum
const DEFAULT_CONTRACT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
const DEFAULT_EVM_ENTITY: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

/// Builder for creating test WatchTarget instances
pub struct WatchTargetBuilder {
	chain: String,
	family: Option<ChainFamily>,
	endpoint: String,
	explorer: String,
	contracts: Vec<String>,
}

impl Default for WatchTargetBuilder {
	fn default() -> Self {
		Self {
			chain: "ethereum".to_string(),
			family: None,
			endpoint: "http://localhost:8545".to_string(),
			explorer: "https://etherscan.io/tx".to_string(),
			contracts: vec![DEFAULT_CONTRACT.to_string()],
		}
	}
}

impl WatchTargetBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn chain(mut self, chain: &str) -> Self {
		self.chain = chain.to_string();
		self
	}

	pub fn family(mut self, family: ChainFamily) -> Self {
		self.family = Some(family);
		self
	}

	pub fn endpoint(mut self, endpoint: &str) -> Self {
		self.endpoint = endpoint.to_string();
		self
	}

	pub fn explorer(mut self, explorer: &str) -> Self {
		self.explorer = explorer.to_string();
		self
	}

	pub fn contracts(mut self, contracts: Vec<&str>) -> Self {
		self.contracts = contracts.into_iter().map(str::to_string).collect();
		self
	}

	pub fn build(self) -> WatchTarget {
		WatchTarget {
			chain: self.chain,
			family: self.family,
			endpoint: self.endpoint,
			explorer: self.explorer,
			contracts: self.contracts,
		}
	}
}

/// Builder for creating test AppConfig instances
pub struct AppConfigBuilder {
	main_webhook: String,
	backup_webhook: String,
	evm_entity: Option<String>,
	tron_entity: Option<String>,
	schedule: ScheduleConfig,
	start_position: StartPosition,
	checkpoint_dir: PathBuf,
	watch_list: Vec<WatchTarget>,
}

impl Default for AppConfigBuilder {
	fn default() -> Self {
		Self {
			main_webhook: "https://hooks.slack.com/services/main".to_string(),
			backup_webhook: "https://hooks.slack.com/services/backup".to_string(),
			evm_entity: Some(DEFAULT_EVM_ENTITY.to_string()),
			tron_entity: None,
			schedule: ScheduleConfig::default(),
			start_position: StartPosition::Current,
			checkpoint_dir: PathBuf::from("data"),
			watch_list: vec![WatchTargetBuilder::new().build()],
		}
	}
}

impl AppConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn main_webhook(mut self, url: &str) -> Self {
		self.main_webhook = url.to_string();
		self
	}

	pub fn backup_webhook(mut self, url: &str) -> Self {
		self.backup_webhook = url.to_string();
		self
	}

	pub fn evm_entity(mut self, address: Option<&str>) -> Self {
		self.evm_entity = address.map(str::to_string);
		self
	}

	pub fn tron_entity(mut self, address: Option<&str>) -> Self {
		self.tron_entity = address.map(str::to_string);
		self
	}

	pub fn scan_schedule(mut self, expression: &str) -> Self {
		self.schedule.scan = expression.to_string();
		self
	}

	pub fn start_position(mut self, position: StartPosition) -> Self {
		self.start_position = position;
		self
	}

	pub fn checkpoint_dir(mut self, dir: PathBuf) -> Self {
		self.checkpoint_dir = dir;
		self
	}

	pub fn watch_list(mut self, targets: Vec<WatchTarget>) -> Self {
		self.watch_list = targets;
		self
	}

	pub fn build(self) -> AppConfig {
		AppConfig {
			slack: SlackConfig {
				main_webhook: self.main_webhook,
				backup_webhook: self.backup_webhook,
			},
			entity_of_interest: EntityOfInterest {
				evm: self.evm_entity,
				tron: self.tron_entity,
			},
			schedule: self.schedule,
			start_position: self.start_position,
			checkpoint_dir: self.checkpoint_dir,
			watch_list: self.watch_list,
		}
	}
}
