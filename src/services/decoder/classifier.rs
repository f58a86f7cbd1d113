//! Log classification by event signature.
//!
//! The node-side filter restricts `eth_getLogs` to [`EventClassifier::monitored_topics`],
//! so every log reaching the classifier should carry one of those signatures.
//! Anything else is rejected with [`DecodeError::UnrecognizedTopic`].

use alloy::primitives::{keccak256, Address, B256, U256};
use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::{
	models::{EVMLog, EventKind},
	services::decoder::DecodeError,
};

lazy_static! {
	/// `AddedBlackList(address)`, emitted by Tether-style tokens
	pub static ref ADDED_BLACK_LIST_TOPIC: B256 = keccak256("AddedBlackList(address)");
	/// `Blacklisted(address)`, emitted by Centre-style tokens
	pub static ref BLACKLISTED_TOPIC: B256 = keccak256("Blacklisted(address)");
	/// `BlockPlaced(address)`
	pub static ref BLOCK_PLACED_TOPIC: B256 = keccak256("BlockPlaced(address)");
	/// `Submission(uint256)`, emitted by the multi-sig wallet
	pub static ref SUBMISSION_TOPIC: B256 = keccak256("Submission(uint256)");

	static ref SIGNATURES: HashMap<B256, Signature> = HashMap::from([
		(*ADDED_BLACK_LIST_TOPIC, Signature::AddedBlackList),
		(*BLACKLISTED_TOPIC, Signature::Blacklisted),
		(*BLOCK_PLACED_TOPIC, Signature::BlockPlaced),
		(*SUBMISSION_TOPIC, Signature::Submission),
	]);
}

#[derive(Debug, Clone, Copy)]
enum Signature {
	AddedBlackList,
	Blacklisted,
	BlockPlaced,
	Submission,
}

impl Signature {
	fn event_name(&self) -> &'static str {
		match self {
			Self::AddedBlackList => "AddedBlackList",
			Self::Blacklisted => "Blacklisted",
			Self::BlockPlaced => "BlockPlaced",
			Self::Submission => "Submission",
		}
	}
}

/// Maps logs to [`EventKind`]s
pub struct EventClassifier;

impl EventClassifier {
	/// Signatures to subscribe to, in a stable order
	pub fn monitored_topics() -> Vec<B256> {
		vec![
			*ADDED_BLACK_LIST_TOPIC,
			*BLACKLISTED_TOPIC,
			*BLOCK_PLACED_TOPIC,
			*SUBMISSION_TOPIC,
		]
	}

	/// Classifies a log and extracts its kind-specific fields
	///
	/// # Errors
	/// - [`DecodeError::UnrecognizedTopic`] if the signature is not monitored
	/// - [`DecodeError::MissingTopic`] if a required topic is absent
	pub fn classify(log: &EVMLog) -> Result<EventKind, DecodeError> {
		let signature_topic = log.signature().ok_or(DecodeError::MissingTopic {
			event: "unknown",
			index: 0,
		})?;

		let signature = SIGNATURES
			.get(signature_topic)
			.copied()
			.ok_or(DecodeError::UnrecognizedTopic(*signature_topic))?;

		let kind = match signature {
			Signature::AddedBlackList => EventKind::AddressBlacklisted {
				subject: blacklisted_subject(log, signature)?,
			},
			Signature::Blacklisted => EventKind::AddressFrozen {
				subject: indexed_subject(log, signature)?,
			},
			Signature::BlockPlaced => EventKind::BlockPlaced {
				subject: indexed_subject(log, signature)?,
			},
			Signature::Submission => EventKind::GovernanceSubmission {
				transaction_id: U256::from_be_bytes(required_topic(log, signature, 1)?.0),
			},
		};

		Ok(kind)
	}
}

fn required_topic(log: &EVMLog, signature: Signature, index: usize) -> Result<&B256, DecodeError> {
	log.topic(index).ok_or(DecodeError::MissingTopic {
		event: signature.event_name(),
		index,
	})
}

fn indexed_subject(log: &EVMLog, signature: Signature) -> Result<Address, DecodeError> {
	required_topic(log, signature, 1).map(|topic| right_aligned_address(topic.as_slice()))
}

/// Older token deployments emit the subject unindexed, in the data payload
fn blacklisted_subject(log: &EVMLog, signature: Signature) -> Result<Address, DecodeError> {
	if let Some(topic) = log.topic(1) {
		return Ok(right_aligned_address(topic.as_slice()));
	}

	if !log.data.is_empty() {
		return Ok(right_aligned_address(&log.data));
	}

	Err(DecodeError::MissingTopic {
		event: signature.event_name(),
		index: 1,
	})
}

/// Takes the last 20 bytes of `word`, left-padding with zeros when shorter
pub(crate) fn right_aligned_address(word: &[u8]) -> Address {
	let mut bytes = [0u8; 20];
	if word.len() >= 20 {
		bytes.copy_from_slice(&word[word.len() - 20..]);
	} else {
		bytes[20 - word.len()..].copy_from_slice(word);
	}
	Address::from(bytes)
}
