//! Test helper utilities for multi-sig submission call data
//!
//! - `SubmissionCalldataBuilder`: Builder for `submitTransaction(address,uint256,bytes)` input

use alloy::primitives::{Address, B256, U256};

/// Selector of `submitTransaction(address,uint256,bytes)`
pub const SUBMIT_TRANSACTION_SELECTOR: [u8; 4] = [0xc6, 0x42, 0x74, 0x74];

/// Builder for creating multi-sig submission call data
///
/// The forwarded payload is appended as-is, without trailing ABI padding.
pub struct SubmissionCalldataBuilder {
	destination: Address,
	value: U256,
	payload: Vec<u8>,
}

impl Default for SubmissionCalldataBuilder {
	fn default() -> Self {
		Self {
			destination: Address::repeat_byte(0xd0),
			value: U256::ZERO,
			payload: Vec::new(),
		}
	}
}

impl SubmissionCalldataBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn destination(mut self, destination: Address) -> Self {
		self.destination = destination;
		self
	}

	pub fn value(mut self, value: U256) -> Self {
		self.value = value;
		self
	}

	pub fn payload(mut self, payload: Vec<u8>) -> Self {
		self.payload = payload;
		self
	}

	/// Forwards a single-address call such as `addBlackList(address)`
	pub fn forward_address_call(mut self, selector: [u8; 4], argument: Address) -> Self {
		let mut payload = selector.to_vec();
		payload.extend_from_slice(argument.into_word().as_slice());
		self.payload = payload;
		self
	}

	pub fn build(self) -> Vec<u8> {
		let mut input = SUBMIT_TRANSACTION_SELECTOR.to_vec();
		input.extend_from_slice(self.destination.into_word().as_slice());
		input.extend_from_slice(B256::from(self.value).as_slice());
		input.extend_from_slice(B256::from(U256::from(0x60u64)).as_slice());
		input.extend_from_slice(B256::from(U256::from(self.payload.len())).as_slice());
		input.extend_from_slice(&self.payload);
		input
	}
}
