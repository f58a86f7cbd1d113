//! Bootstrap module for turning configuration into running services.
//!
//! - `build_chain_handles`: decodes the watch list into [`ChainHandle`]s
//! - `resolve_start_height`: picks each chain's initial tracked height
//! - `initialize_scanners`: connects to every node and builds its scanner
//! - `announce_startup`: checks the main webhook and posts the startup message

use std::{error::Error, sync::Arc};

use crate::{
	models::{AlertChannel, AppConfig, ChainHandle, ConfigError, StartPosition},
	services::{
		blockchain::{BlockChainClient, EvmClient},
		blockwatcher::{
			BlockStorage, BlockWatcherError, BlockWindowScanner, ChainScanner, FileBlockStorage,
		},
		decoder::{AddressCodec, EventClassifier},
		notification::{NotificationError, NotificationRouter, Notifier, SlackRouter},
	},
	utils::STARTUP_MESSAGE,
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Decodes the watch list into chain handles
///
/// Chain names are lowercased. Every contract and the family's entity of
/// interest are decoded with the family's address codec.
///
/// # Errors
/// Returns [`ConfigError::ValidationError`] for an address that does not
/// decode or a family without an entity of interest.
pub fn build_chain_handles(config: &AppConfig) -> std::result::Result<Vec<ChainHandle>, ConfigError> {
	config
		.watch_list
		.iter()
		.map(|target| {
			let family = target.family();
			let name = target.chain.to_lowercase();

			let contracts = target
				.contracts
				.iter()
				.map(|contract| {
					AddressCodec::decode(contract, family).map_err(|e| {
						ConfigError::validation_error(format!("Chain {}: {}", name, e))
					})
				})
				.collect::<std::result::Result<Vec<_>, _>>()?;

			let entity = config.entity_of_interest.for_family(family).ok_or_else(|| {
				ConfigError::validation_error(format!(
					"Chain {}: no entity of interest configured for family {}",
					name, family
				))
			})?;
			let entity_of_interest = AddressCodec::decode(entity, family)
				.map_err(|e| ConfigError::validation_error(format!("Chain {}: {}", name, e)))?;

			Ok(ChainHandle {
				name,
				family,
				endpoint: target.endpoint.clone(),
				explorer: target.explorer.clone(),
				contracts,
				topics: EventClassifier::monitored_topics(),
				entity_of_interest,
			})
		})
		.collect()
}

/// Picks the height a chain's first scan starts from
///
/// With [`StartPosition::Checkpoint`] the block after the saved one is used
/// when a checkpoint exists. Otherwise the node's current height is used.
pub async fn resolve_start_height<C: BlockChainClient + ?Sized>(
	chain: &str,
	client: &C,
	storage: Option<&dyn BlockStorage>,
) -> std::result::Result<u64, BlockWatcherError> {
	if let Some(storage) = storage {
		if let Some(saved) = storage.get_last_processed_block(chain).await? {
			tracing::info!(chain, saved, "Resuming from checkpoint");
			return Ok(saved.saturating_add(1));
		}
	}

	let current = client.get_latest_block_number().await?;
	tracing::info!(chain, current, "Starting from current height");
	Ok(current)
}

/// Connects to every chain's node and builds its scanner
///
/// # Errors
/// Fails if a node cannot be reached or its start height cannot be resolved.
pub async fn initialize_scanners<R: NotificationRouter + 'static>(
	config: &AppConfig,
	chains: Vec<ChainHandle>,
	router: Arc<R>,
) -> Result<Vec<Arc<dyn ChainScanner>>> {
	let storage: Option<Arc<dyn BlockStorage>> = match config.start_position {
		StartPosition::Current => None,
		StartPosition::Checkpoint => Some(Arc::new(FileBlockStorage::new(
			config.checkpoint_dir.clone(),
		))),
	};

	let mut scanners: Vec<Arc<dyn ChainScanner>> = Vec::with_capacity(chains.len());

	for chain in chains {
		let client = Arc::new(EvmClient::new(&chain).await?);
		let start_height =
			resolve_start_height(&chain.name, client.as_ref(), storage.as_deref()).await?;

		let mut scanner = BlockWindowScanner::new(chain, client, router.clone(), start_height);
		if let Some(storage) = &storage {
			scanner = scanner.with_storage(storage.clone());
		}
		scanners.push(Arc::new(scanner));
	}

	Ok(scanners)
}

/// Verifies the main webhook and announces startup on the secondary channel
///
/// # Errors
/// Either step failing aborts startup.
pub async fn announce_startup<N: Notifier>(
	router: &SlackRouter<N>,
) -> std::result::Result<(), NotificationError> {
	router.probe_primary().await?;

	if !router
		.send(AlertChannel::Secondary, STARTUP_MESSAGE, false)
		.await
	{
		return Err(NotificationError::internal_error(
			"Failed to send startup message to the secondary channel",
		));
	}

	Ok(())
}
