//! Per-chain block window scanner.
//!
//! Each scan tick queries the current height, then walks bounded windows up
//! to it. Logs of every window are classified, governance submissions are
//! decoded from their transaction input, and one alert per log is handed to
//! the notification router before the window is marked as processed.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
	models::{AlertDecision, ChainHandle, EVMLog, EVMLogFilter, EventKind},
	services::{
		blockchain::EvmClientTrait,
		blockwatcher::{BlockStorage, BlockWatcherError, BlockWindow, ScanProgress},
		decoder::{AddressCodec, CalldataDecoder, EventClassifier},
		notification::{render_alert, NotificationRouter},
	},
};

/// Counters describing one scan tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
	pub windows_processed: usize,
	pub logs_seen: usize,
	pub alerts_emitted: usize,
	pub logs_skipped: usize,
	/// Set when the tick was dropped because a scan was still running
	pub skipped: bool,
}

/// A chain the scheduler can drive and the health reports can read
#[async_trait]
pub trait ChainScanner: Send + Sync {
	fn chain_name(&self) -> &str;

	/// Runs one scan tick
	///
	/// # Errors
	/// Fails when the current height or a window's logs cannot be fetched.
	/// Windows advanced before the failure stay advanced.
	async fn scan(&self) -> Result<ScanSummary, BlockWatcherError>;

	/// Current progress without resetting the counter
	async fn progress(&self) -> ScanProgress;

	/// Current progress, resetting the processed-blocks counter
	async fn take_progress(&self) -> ScanProgress;
}

/// Scans one chain through an EVM-style client
pub struct BlockWindowScanner<C, R> {
	chain: ChainHandle,
	client: Arc<C>,
	router: Arc<R>,
	filter: EVMLogFilter,
	progress: Mutex<ScanProgress>,
	scan_guard: Mutex<()>,
	storage: Option<Arc<dyn BlockStorage>>,
}

impl<C: EvmClientTrait, R: NotificationRouter> BlockWindowScanner<C, R> {
	/// Creates a scanner that starts at `start_height`
	pub fn new(chain: ChainHandle, client: Arc<C>, router: Arc<R>, start_height: u64) -> Self {
		let filter = EVMLogFilter::new(chain.contracts.clone(), chain.topics.clone());

		Self {
			chain,
			client,
			router,
			filter,
			progress: Mutex::new(ScanProgress::new(start_height)),
			scan_guard: Mutex::new(()),
			storage: None,
		}
	}

	/// Saves the last processed block of every advanced window to `storage`
	pub fn with_storage(mut self, storage: Arc<dyn BlockStorage>) -> Self {
		self.storage = Some(storage);
		self
	}

	pub fn chain(&self) -> &ChainHandle {
		&self.chain
	}

	async fn run_windows(&self, summary: &mut ScanSummary) -> Result<(), BlockWatcherError> {
		let current_height = self.client.get_latest_block_number().await?;

		loop {
			let latest = self.progress.lock().await.latest_scanned_height;
			let Some(window) = BlockWindow::next(latest, current_height) else {
				break;
			};

			tracing::debug!(
				chain = %self.chain.name,
				from = window.from,
				to = window.to,
				"Scanning block window"
			);

			let logs = self
				.client
				.get_logs_for_blocks(window.from, window.to, &self.filter)
				.await?;
			summary.logs_seen += logs.len();

			for log in &logs {
				match self.process_log(log).await {
					Ok(decision) => {
						if self
							.router
							.send(decision.channel, &decision.message, decision.escalate)
							.await
						{
							summary.alerts_emitted += 1;
						}
					}
					Err(e) => {
						summary.logs_skipped += 1;
						tracing::warn!(
							chain = %self.chain.name,
							tx_hash = %log.transaction_hash,
							error = %e,
							"Skipping log"
						);
					}
				}
			}

			self.progress.lock().await.advance(&window);
			summary.windows_processed += 1;

			if let Some(storage) = &self.storage {
				if let Err(e) = storage
					.save_last_processed_block(&self.chain.name, window.to)
					.await
				{
					tracing::warn!(chain = %self.chain.name, error = %e, "Failed to save checkpoint");
				}
			}
		}

		Ok(())
	}

	/// Turns one log into an alert decision
	///
	/// # Errors
	/// Returns [`BlockWatcherError::ProcessingError`] when the log cannot be
	/// classified, or when a submission's input cannot be fetched or decoded.
	pub async fn process_log(&self, log: &EVMLog) -> Result<AlertDecision, BlockWatcherError> {
		let kind = EventClassifier::classify(log)
			.map_err(|e| BlockWatcherError::processing_error(e.to_string()))?;
		let entity = &self.chain.entity_of_interest;

		let (action, involves_entity) = match &kind {
			EventKind::GovernanceSubmission { .. } => {
				let input = self
					.client
					.get_transaction_input(log.transaction_hash)
					.await
					.map_err(|e| BlockWatcherError::processing_error(e.to_string()))?;
				let action = CalldataDecoder::decode(&input)
					.map_err(|e| BlockWatcherError::processing_error(e.to_string()))?;

				let involves_entity = action.destination == *entity
					|| action
						.payload_hex()
						.contains(&AddressCodec::to_plain_hex(entity));
				(Some(action), involves_entity)
			}
			other => (None, other.subject() == Some(entity)),
		};

		let message = render_alert(&self.chain, &kind, &log.transaction_hash, action.as_ref());
		Ok(AlertDecision::route(
			self.chain.name.clone(),
			message,
			involves_entity,
		))
	}
}

#[async_trait]
impl<C: EvmClientTrait, R: NotificationRouter> ChainScanner for BlockWindowScanner<C, R> {
	fn chain_name(&self) -> &str {
		&self.chain.name
	}

	async fn scan(&self) -> Result<ScanSummary, BlockWatcherError> {
		let Ok(_guard) = self.scan_guard.try_lock() else {
			tracing::warn!(chain = %self.chain.name, "Previous scan still running, skipping tick");
			return Ok(ScanSummary {
				skipped: true,
				..Default::default()
			});
		};

		let mut summary = ScanSummary::default();
		let result = self.run_windows(&mut summary).await;

		tracing::info!(
			chain = %self.chain.name,
			windows = summary.windows_processed,
			logs = summary.logs_seen,
			alerts = summary.alerts_emitted,
			skipped_logs = summary.logs_skipped,
			"Scan finished"
		);

		result.map(|_| summary)
	}

	async fn progress(&self) -> ScanProgress {
		*self.progress.lock().await
	}

	async fn take_progress(&self) -> ScanProgress {
		let mut progress = self.progress.lock().await;
		let snapshot = *progress;
		progress.take_processed();
		snapshot
	}
}
