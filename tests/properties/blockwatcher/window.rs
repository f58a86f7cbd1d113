//! Property-based tests for bounded block windows.

use defi_notifier::{
	services::blockwatcher::{BlockWindow, ScanProgress},
	utils::MAX_BLOCKS_PER_QUERY,
};
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_full_drain_covers_every_block_once(
		start in 0u64..1_000_000,
		distance in 0u64..20_000,
	) {
		let current = start + distance;
		let mut progress = ScanProgress::new(start);
		let mut expected_from = start;

		while let Some(window) = BlockWindow::next(progress.latest_scanned_height, current) {
			prop_assert_eq!(window.from, expected_from);
			prop_assert!(window.to >= window.from);
			prop_assert!(window.block_count() <= MAX_BLOCKS_PER_QUERY);
			prop_assert!(window.to <= current);

			progress.advance(&window);
			expected_from = window.to + 1;
		}

		prop_assert_eq!(progress.latest_scanned_height, current + 1);
		prop_assert_eq!(progress.blocks_processed_since_last_report, distance + 1);
	}

	#[test]
	fn test_no_window_past_current(current in 0u64..1_000_000, ahead in 1u64..1000) {
		prop_assert_eq!(BlockWindow::next(current + ahead, current), None);
	}
}
