//! Test helper utilities for monitored chains
//!
//! - `ChainHandleBuilder`: Builder for creating test ChainHandle instances

use alloy::primitives::{Address, B256};

use crate::{
	models::{ChainFamily, ChainHandle},
	services::decoder::EventClassifier,
};

/// Builder for creating test ChainHandle instances
pub struct ChainHandleBuilder {
	name: String,
	family: ChainFamily,
	endpoint: String,
	explorer: String,
	contracts: Vec<Address>,
	topics: Vec<B256>,
	entity_of_interest: Address,
}

impl Default for ChainHandleBuilder {
	fn default() -> Self {
		Self {
			name: "ethereum".to_string(),
			family: ChainFamily::Evm,
			endpoint: "http://localhost:8545".to_string(),
			explorer: "https://etherscan.io/tx".to_string(),
			contracts: vec![Address::repeat_byte(0xc0)],
			topics: EventClassifier::monitored_topics(),
			entity_of_interest: Address::repeat_byte(0xe1),
		}
	}
}

impl ChainHandleBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name(mut self, name: &str) -> Self {
		self.name = name.to_string();
		self
	}

	pub fn family(mut self, family: ChainFamily) -> Self {
		self.family = family;
		self
	}

	pub fn endpoint(mut self, endpoint: &str) -> Self {
		self.endpoint = endpoint.to_string();
		self
	}

	pub fn explorer(mut self, explorer: &str) -> Self {
		self.explorer = explorer.to_string();
		self
	}

	pub fn contracts(mut self, contracts: Vec<Address>) -> Self {
		self.contracts = contracts;
		self
	}

	pub fn topics(mut self, topics: Vec<B256>) -> Self {
		self.topics = topics;
		self
	}

	pub fn entity_of_interest(mut self, address: Address) -> Self {
		self.entity_of_interest = address;
		self
	}

	pub fn build(self) -> ChainHandle {
		ChainHandle {
			name: self.name,
			family: self.family,
			endpoint: self.endpoint,
			explorer: self.explorer,
			contracts: self.contracts,
			topics: self.topics,
			entity_of_interest: self.entity_of_interest,
		}
	}
}
