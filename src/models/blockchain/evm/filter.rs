//! Log filter sent with `eth_getLogs`.

use alloy::primitives::{Address, B256};
use serde_json::{json, Value};

/// Address and topic restrictions for a log query
///
/// Topics are matched in the first position only, as an OR-set: a log
/// matches when its signature is any of `topics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
	pub addresses: Vec<Address>,
	pub topics: Vec<B256>,
}

impl LogFilter {
	pub fn new(addresses: Vec<Address>, topics: Vec<B256>) -> Self {
		Self { addresses, topics }
	}

	/// Builds the JSON-RPC filter object for the inclusive range `[from_block, to_block]`
	pub fn to_rpc_params(&self, from_block: u64, to_block: u64) -> Value {
		json!({
			"fromBlock": format!("0x{:x}", from_block),
			"toBlock": format!("0x{:x}", to_block),
			"address": self.addresses,
			"topics": [self.topics],
		})
	}
}
