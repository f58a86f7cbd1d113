//! Test helper utilities for EVM logs
//!
//! - `LogBuilder`: Builder for creating test EVMLog instances

use alloy::primitives::{Address, Bytes, B256, U64};

use crate::models::EVMLog;

/// Builder for creating test EVMLog instances
pub struct LogBuilder {
	address: Address,
	topics: Vec<B256>,
	data: Vec<u8>,
	transaction_hash: B256,
	block_number: Option<u64>,
}

impl Default for LogBuilder {
	fn default() -> Self {
		Self {
			address: Address::repeat_byte(0xc0),
			topics: Vec::new(),
			data: Vec::new(),
			transaction_hash: B256::repeat_byte(0x7a),
			block_number: None,
		}
	}
}

impl LogBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Emitting contract
	pub fn contract(mut self, address: Address) -> Self {
		self.address = address;
		self
	}

	/// Appends a raw topic
	pub fn topic(mut self, topic: B256) -> Self {
		self.topics.push(topic);
		self
	}

	/// Appends an address as an indexed (left-padded) topic
	pub fn address_topic(mut self, address: Address) -> Self {
		self.topics.push(address.into_word());
		self
	}

	/// Sets the data payload to a single ABI-encoded address word
	pub fn address_data(mut self, address: Address) -> Self {
		self.data = address.into_word().to_vec();
		self
	}

	pub fn data(mut self, data: Vec<u8>) -> Self {
		self.data = data;
		self
	}

	pub fn transaction_hash(mut self, hash: B256) -> Self {
		self.transaction_hash = hash;
		self
	}

	pub fn block_number(mut self, number: u64) -> Self {
		self.block_number = Some(number);
		self
	}

	pub fn build(self) -> EVMLog {
		EVMLog {
			address: self.address,
			topics: self.topics,
			data: Bytes::from(self.data),
			transaction_hash: self.transaction_hash,
			block_number: self.block_number.map(U64::from),
			log_index: None,
		}
	}
}
