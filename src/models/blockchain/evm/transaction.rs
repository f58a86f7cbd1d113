//! EVM transaction data structures.

use alloy::primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// The subset of `eth_getTransactionByHash` the notifier needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	pub hash: B256,
	#[serde(default)]
	pub from: Option<Address>,
	#[serde(default)]
	pub to: Option<Address>,
	/// Call data sent with the transaction
	#[serde(default)]
	pub input: Bytes,
}
