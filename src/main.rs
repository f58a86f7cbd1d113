//! DeFi notifier entry point.
//!
//! # Flow
//! 1. Loads the JSON configuration and validates it
//! 2. Checks the main Slack webhook and announces startup on the backup one
//! 3. Connects to every watched chain and resolves its start height
//! 4. Schedules scans and health reports
//! 5. Stops the scheduler on Ctrl+C or SIGTERM

use defi_notifier::{
	bootstrap::{announce_startup, build_chain_handles, initialize_scanners, Result},
	models::{AppConfig, ConfigLoader},
	services::{blockwatcher::BlockWatcherService, notification::SlackRouter},
	utils::{logging::setup_logging, DEFAULT_CONFIG_PATH},
};

use clap::{Arg, Command};
use dotenvy::dotenv;
use std::env::{set_var, var};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Resolves the configuration path from the CLI, then `CONFIG_PATH`, then the default
fn config_path(cli: Option<&String>) -> PathBuf {
	cli.map(PathBuf::from)
		.or_else(|| var("CONFIG_PATH").ok().map(PathBuf::from))
		.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Prints what a validated configuration would watch
fn print_config_summary(config: &AppConfig) {
	info!("Configuration is valid");
	info!(
		start_position = ?config.start_position,
		scan = %config.schedule.scan,
		"Schedule"
	);
	for target in &config.watch_list {
		info!(
			chain = %target.chain,
			family = %target.family(),
			contracts = target.contracts.len(),
			"Watching chain"
		);
	}
}

async fn wait_for_shutdown() {
	let ctrl_c = tokio::signal::ctrl_c();

	#[cfg(unix)]
	{
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut sigterm) => {
				tokio::select! {
					_ = ctrl_c => {}
					_ = sigterm.recv() => {}
				}
			}
			Err(e) => {
				error!("Failed to install SIGTERM handler: {}", e);
				let _ = ctrl_c.await;
			}
		}
	}

	#[cfg(not(unix))]
	{
		let _ = ctrl_c.await;
	}
}

/// Main entry point for the notifier.
///
/// # Errors
/// Returns an error if configuration, the startup announcement, node
/// connections or the scheduler fail.
#[tokio::main]
async fn main() -> Result<()> {
	let matches = Command::new("defi-notifier")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Watches token contracts for blacklist and multi-sig governance events and alerts \
			 Slack.",
		)
		.arg(
			Arg::new("config")
				.long("config")
				.help("Path to the JSON configuration (default: config/config.json)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stdout")
				.action(clap::ArgAction::SetTrue),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("check-config")
				.long("check-config")
				.help("Validate the configuration and exit")
				.action(clap::ArgAction::SetTrue),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}

	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(path) = matches.get_one::<String>("log-path") {
		if var("LOG_DATA_DIR").is_err() {
			set_var("LOG_DATA_DIR", path);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let path = config_path(matches.get_one::<String>("config"));
	let config = AppConfig::load_from_path(&path).map_err(|e| {
		anyhow::anyhow!("Failed to load configuration from {}: {}", path.display(), e)
	})?;
	let chains = build_chain_handles(&config)?;

	if matches.get_flag("check-config") {
		print_config_summary(&config);
		return Ok(());
	}

	let router = Arc::new(SlackRouter::from_config(&config.slack)?);
	announce_startup(router.as_ref())
		.await
		.map_err(|e| anyhow::anyhow!("Startup announcement failed: {}", e))?;

	let scanners = initialize_scanners(&config, chains, router.clone()).await?;

	let mut block_watcher =
		BlockWatcherService::new(scanners, router.clone(), config.schedule.clone());
	block_watcher.start().await?;

	info!("Service started. Press Ctrl+C to shutdown");
	wait_for_shutdown().await;
	info!("Shutdown signal received, stopping services...");

	if let Err(e) = block_watcher.stop().await {
		error!("Error during shutdown: {}", e);
	}

	info!("Shutdown complete");
	Ok(())
}
