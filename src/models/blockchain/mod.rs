//! Blockchain-specific model implementations.
//!
//! This module contains type definitions for the chain families the notifier
//! understands. Both families speak the Ethereum JSON-RPC dialect; they only
//! differ in how addresses are rendered to humans and in configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod evm;

/// Address-encoding convention used by a monitored chain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
	/// Ethereum-compatible chains, `0x`-prefixed hexadecimal addresses
	Evm,
	/// Tron-style chains, base58check addresses with a `0x41` version byte
	Tron,
}

impl ChainFamily {
	/// Infers the family from a configured chain name.
	///
	/// Only a chain literally named `tron` (any case) is treated as Tron.
	pub fn from_chain_name(chain: &str) -> Self {
		if chain.trim().eq_ignore_ascii_case("tron") {
			Self::Tron
		} else {
			Self::Evm
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Evm => "evm",
			Self::Tron => "tron",
		}
	}
}

impl fmt::Display for ChainFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
