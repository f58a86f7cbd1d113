//! EVM log data structures.

use alloy::primitives::{Address, Bytes, B256, U64};
use serde::{Deserialize, Serialize};

/// An event log as returned by `eth_getLogs`
///
/// Only the fields the notifier consumes are kept; everything else in the
/// node response is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
	/// Contract that emitted the log
	pub address: Address,
	/// Indexed topics, the first one being the event signature hash
	pub topics: Vec<B256>,
	/// Non-indexed event data
	#[serde(default)]
	pub data: Bytes,
	/// Hash of the transaction that emitted the log
	pub transaction_hash: B256,
	/// Block containing the transaction
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub block_number: Option<U64>,
	/// Position of the log within the block
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub log_index: Option<U64>,
}

impl Log {
	/// Returns the event signature hash (first topic)
	pub fn signature(&self) -> Option<&B256> {
		self.topics.first()
	}

	/// Returns the topic at `index`, if present
	pub fn topic(&self, index: usize) -> Option<&B256> {
		self.topics.get(index)
	}

	/// Returns the block number as a `u64`
	pub fn block_number(&self) -> Option<u64> {
		self.block_number.map(|n| n.to::<u64>())
	}
}
