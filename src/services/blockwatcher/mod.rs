//! Block watcher service.
//!
//! Drives one [`BlockWindowScanner`] per chain on a cron schedule, persists
//! optional height checkpoints and emits periodic health reports.

mod error;
mod report;
mod scanner;
mod service;
mod storage;
mod window;

pub use error::BlockWatcherError;
pub use report::HealthReport;
pub use scanner::{BlockWindowScanner, ChainScanner, ScanSummary};
pub use service::BlockWatcherService;
pub use storage::{BlockStorage, FileBlockStorage};
pub use window::{BlockWindow, ScanProgress};
