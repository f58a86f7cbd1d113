//! Height checkpoints.
//!
//! Used when the start position is `checkpoint`: the last fully processed
//! block of each chain is kept in `<dir>/<chain>_last_block.txt`.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::services::blockwatcher::BlockWatcherError;

/// Persistence for the last processed block of each chain
#[async_trait]
pub trait BlockStorage: Send + Sync {
	/// Returns the last fully processed block, or `None` if nothing was saved
	async fn get_last_processed_block(&self, chain: &str)
		-> Result<Option<u64>, BlockWatcherError>;

	/// Records `block` as the last fully processed block
	async fn save_last_processed_block(
		&self,
		chain: &str,
		block: u64,
	) -> Result<(), BlockWatcherError>;
}

/// Stores one plain-text block number per chain
#[derive(Debug, Clone)]
pub struct FileBlockStorage {
	storage_path: PathBuf,
}

impl Default for FileBlockStorage {
	fn default() -> Self {
		Self::new(PathBuf::from("data"))
	}
}

impl FileBlockStorage {
	pub fn new(storage_path: PathBuf) -> Self {
		FileBlockStorage { storage_path }
	}

	fn file_path(&self, chain: &str) -> PathBuf {
		self.storage_path.join(format!("{}_last_block.txt", chain))
	}
}

#[async_trait]
impl BlockStorage for FileBlockStorage {
	async fn get_last_processed_block(
		&self,
		chain: &str,
	) -> Result<Option<u64>, BlockWatcherError> {
		let file_path = self.file_path(chain);

		if !file_path.exists() {
			return Ok(None);
		}

		let content = tokio::fs::read_to_string(&file_path).await.map_err(|e| {
			BlockWatcherError::storage_error(format!(
				"Failed to read {}: {}",
				file_path.display(),
				e
			))
		})?;

		let block_number = content.trim().parse().map_err(|e| {
			BlockWatcherError::storage_error(format!(
				"Invalid block number in {}: {}",
				file_path.display(),
				e
			))
		})?;

		Ok(Some(block_number))
	}

	async fn save_last_processed_block(
		&self,
		chain: &str,
		block: u64,
	) -> Result<(), BlockWatcherError> {
		tokio::fs::create_dir_all(&self.storage_path)
			.await
			.map_err(|e| {
				BlockWatcherError::storage_error(format!(
					"Failed to create {}: {}",
					self.storage_path.display(),
					e
				))
			})?;

		let file_path = self.file_path(chain);
		tokio::fs::write(&file_path, block.to_string())
			.await
			.map_err(|e| {
				BlockWatcherError::storage_error(format!(
					"Failed to write {}: {}",
					file_path.display(),
					e
				))
			})?;
		Ok(())
	}
}
