use alloy::primitives::{Address, Bytes, U256};

/// Classified meaning of a monitored log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
	/// `AddedBlackList(address)`
	AddressBlacklisted { subject: Address },
	/// `Blacklisted(address)`, same semantics as `AddressBlacklisted` under another name
	AddressFrozen { subject: Address },
	/// `BlockPlaced(address)`
	BlockPlaced { subject: Address },
	/// `Submission(uint256)` emitted by the multi-sig wallet
	GovernanceSubmission { transaction_id: U256 },
}

impl EventKind {
	/// Event name as it appears in logs
	pub fn name(&self) -> &'static str {
		match self {
			Self::AddressBlacklisted { .. } => "AddedBlackList",
			Self::AddressFrozen { .. } => "Blacklisted",
			Self::BlockPlaced { .. } => "BlockPlaced",
			Self::GovernanceSubmission { .. } => "Submission",
		}
	}

	/// Address the event is about, if any
	pub fn subject(&self) -> Option<&Address> {
		match self {
			Self::AddressBlacklisted { subject }
			| Self::AddressFrozen { subject }
			| Self::BlockPlaced { subject } => Some(subject),
			Self::GovernanceSubmission { .. } => None,
		}
	}
}

/// Action recovered from a multi-sig submission's call data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAction {
	/// Contract the multi-sig will call once confirmed
	pub destination: Address,
	/// Call data forwarded to `destination`
	pub payload: Bytes,
	/// Human-readable signature, or `"unknown"`
	pub action: &'static str,
}

impl DecodedAction {
	/// Lowercase hex of the forwarded payload without `0x`
	pub fn payload_hex(&self) -> String {
		hex::encode(&self.payload)
	}
}
