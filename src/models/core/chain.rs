use alloy::primitives::{Address, B256};

use crate::models::ChainFamily;

/// A monitored chain, built once from configuration at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHandle {
	/// Lowercased chain name used in logs and alert messages
	pub name: String,
	pub family: ChainFamily,
	/// JSON-RPC endpoint of the node
	pub endpoint: String,
	/// Explorer base URL that transaction hashes are appended to
	pub explorer: String,
	/// Token contracts whose logs are fetched
	pub contracts: Vec<Address>,
	/// Event signatures the node-side filter restricts to
	pub topics: Vec<B256>,
	/// Account whose involvement escalates an alert
	pub entity_of_interest: Address,
}
