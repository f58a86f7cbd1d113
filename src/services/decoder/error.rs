//! Decoding error types.

use alloy::primitives::B256;
use thiserror::Error;

use crate::models::ChainFamily;

/// Errors raised while turning raw chain data into domain types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// The text is not a valid address for the chain family
	#[error("Invalid {family} address format: {address}")]
	InvalidAddressFormat { address: String, family: ChainFamily },

	/// Multi-sig submission input too short to hold its fixed arguments
	#[error("Malformed calldata: expected at least {expected} bytes, got {actual}")]
	MalformedCalldata { expected: usize, actual: usize },

	/// Log signature outside the monitored set
	#[error("Unrecognized topic signature: {0}")]
	UnrecognizedTopic(B256),

	/// Log lacks a topic its event type requires
	#[error("{event} log is missing topic {index}")]
	MissingTopic { event: &'static str, index: usize },
}
