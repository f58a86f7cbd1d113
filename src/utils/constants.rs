//! Constants used throughout the application.

/// Configuration path used when neither `--config` nor `CONFIG_PATH` is given
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Announcement sent to the secondary channel once startup succeeds
pub const STARTUP_MESSAGE: &str = "🚀 DeFi Notifier is started 🚀";

/// Appended to escalated messages so Slack notifies everyone in the channel
pub const ESCALATION_SUFFIX: &str = "\nPlease check this! <!channel>";

/// Largest inclusive block range requested in a single `eth_getLogs` call
pub const MAX_BLOCKS_PER_QUERY: u64 = 1000;
