//! Bounded block windows and per-chain scan progress.

use crate::utils::MAX_BLOCKS_PER_QUERY;

/// Inclusive block range fetched with a single log query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWindow {
	pub from: u64,
	pub to: u64,
}

impl BlockWindow {
	/// Next window to scan, starting at `latest_scanned_height`
	///
	/// Returns `None` once the tracked height has passed `current_height`.
	/// A window never spans more than [`MAX_BLOCKS_PER_QUERY`] blocks.
	pub fn next(latest_scanned_height: u64, current_height: u64) -> Option<Self> {
		if latest_scanned_height > current_height {
			return None;
		}

		let to = latest_scanned_height
			.saturating_add(MAX_BLOCKS_PER_QUERY - 1)
			.min(current_height);

		Some(Self {
			from: latest_scanned_height,
			to,
		})
	}

	/// Number of blocks covered
	pub fn block_count(&self) -> u64 {
		self.to - self.from + 1
	}
}

/// Tracked height and health counter of one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
	/// Next block to scan from
	pub latest_scanned_height: u64,
	/// Blocks covered by advanced windows since the last health report
	pub blocks_processed_since_last_report: u64,
}

impl ScanProgress {
	pub fn new(start_height: u64) -> Self {
		Self {
			latest_scanned_height: start_height,
			blocks_processed_since_last_report: 0,
		}
	}

	/// Moves past a fully processed window
	pub fn advance(&mut self, window: &BlockWindow) {
		self.blocks_processed_since_last_report += window.to - self.latest_scanned_height + 1;
		self.latest_scanned_height = window.to + 1;
	}

	/// Returns the counter and resets it
	pub fn take_processed(&mut self) -> u64 {
		std::mem::take(&mut self.blocks_processed_since_last_report)
	}
}
