//! Decoding of on-chain data into notifier domain types.
//!
//! - `AddressCodec`: converts addresses to and from each chain family's text form
//! - `EventClassifier`: maps a log's signature topic to an [`EventKind`](crate::models::EventKind)
//! - `CalldataDecoder`: recovers the action behind a multi-sig submission
//!
//! All lookup tables are immutable and built once on first use.

mod address;
mod calldata;
mod classifier;
mod error;

pub use address::{AddressCodec, TRON_ADDRESS_VERSION};
pub use calldata::{CalldataDecoder, SUBMISSION_HEADER_LEN, UNKNOWN_ACTION};
pub use classifier::{
	EventClassifier, ADDED_BLACK_LIST_TOPIC, BLACKLISTED_TOPIC, BLOCK_PLACED_TOPIC,
	SUBMISSION_TOPIC,
};
pub use error::DecodeError;
