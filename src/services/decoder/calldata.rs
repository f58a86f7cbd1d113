//! Multi-sig `submitTransaction(address,uint256,bytes)` input decoding.
//!
//! Layout of the call input:
//!
//! ```text
//! [0..4)      selector
//! [4..36)     destination (right-aligned address)
//! [36..68)    value
//! [68..100)   offset of `data`
//! [100..132)  length of `data`
//! [132..)     forwarded call data
//! ```

use alloy::primitives::Bytes;
use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::{
	models::DecodedAction,
	services::decoder::{classifier::right_aligned_address, DecodeError},
};

const SELECTOR_LEN: usize = 4;
const WORD_LEN: usize = 32;

/// Minimum input length: selector plus four argument words
pub const SUBMISSION_HEADER_LEN: usize = SELECTOR_LEN + 4 * WORD_LEN;

/// Action name reported when the forwarded selector is not in the table
pub const UNKNOWN_ACTION: &str = "unknown";

lazy_static! {
	static ref ACTIONS: HashMap<&'static str, &'static str> = HashMap::from([
		("0xf2fde38b", "transferOwnership(address)"),
		("0x8456cb59", "pause()"),
		("0x3f4ba83a", "unpause()"),
		("0x0ecb93c0", "addBlackList(address)"),
		("0xe4997dc5", "removeBlackList(address)"),
		("0xf3bdc228", "destroyBlackFunds(address)"),
		("0x0753c30c", "deprecate(address)"),
		("0xcc872b66", "issue(uint256)"),
		("0xdb006a75", "redeem(uint256)"),
		("0xc0324c77", "setParams(uint256,uint256)"),
	]);
}

/// Decoder for multi-sig submission call data
pub struct CalldataDecoder;

impl CalldataDecoder {
	/// Extracts destination, forwarded payload and recognized action
	///
	/// # Errors
	/// Returns [`DecodeError::MalformedCalldata`] when `input` is shorter than
	/// [`SUBMISSION_HEADER_LEN`].
	pub fn decode(input: &[u8]) -> Result<DecodedAction, DecodeError> {
		if input.len() < SUBMISSION_HEADER_LEN {
			return Err(DecodeError::MalformedCalldata {
				expected: SUBMISSION_HEADER_LEN,
				actual: input.len(),
			});
		}

		let destination = right_aligned_address(&input[SELECTOR_LEN..SELECTOR_LEN + WORD_LEN]);
		let payload = &input[SUBMISSION_HEADER_LEN..];

		Ok(DecodedAction {
			destination,
			payload: Bytes::copy_from_slice(payload),
			action: Self::action_name(payload),
		})
	}

	/// Looks up the signature for a payload's leading selector
	pub fn action_name(payload: &[u8]) -> &'static str {
		if payload.len() < SELECTOR_LEN {
			return UNKNOWN_ACTION;
		}

		let selector = format!("0x{}", hex::encode(&payload[..SELECTOR_LEN]));
		ACTIONS.get(selector.as_str()).copied().unwrap_or(UNKNOWN_ACTION)
	}
}
