//! Address conversion between raw 20-byte values and each chain family's text form.
//!
//! EVM addresses are rendered in EIP-55 checksum form and accepted in any
//! case. Tron addresses are base58check over `0x41 || address`, where the
//! checksum is the first four bytes of a double SHA-256.

use alloy::primitives::Address;
use sha2::{Digest, Sha256};

use crate::{models::ChainFamily, services::decoder::DecodeError};

/// Version byte prefixed to Tron mainnet addresses
pub const TRON_ADDRESS_VERSION: u8 = 0x41;

const ADDRESS_LEN: usize = 20;
const CHECKSUM_LEN: usize = 4;

/// Stateless converter dispatched on [`ChainFamily`]
pub struct AddressCodec;

impl AddressCodec {
	/// Parses a chain-native address string
	///
	/// # Errors
	/// Returns [`DecodeError::InvalidAddressFormat`] when the text is not a
	/// well-formed address of the given family (bad hex, bad base58, wrong
	/// checksum or version byte, wrong length).
	pub fn decode(native: &str, family: ChainFamily) -> Result<Address, DecodeError> {
		let parsed = match family {
			ChainFamily::Evm => decode_hex(native),
			ChainFamily::Tron => decode_base58check(native),
		};

		parsed.ok_or_else(|| DecodeError::InvalidAddressFormat {
			address: native.to_string(),
			family,
		})
	}

	/// Renders an address in the family's native form
	pub fn encode(address: &Address, family: ChainFamily) -> String {
		match family {
			ChainFamily::Evm => address.to_checksum(None),
			ChainFamily::Tron => encode_base58check(address),
		}
	}

	/// Lowercase hex without `0x`, the form used for substring matching in call data
	pub fn to_plain_hex(address: &Address) -> String {
		hex::encode(address.as_slice())
	}
}

fn decode_hex(native: &str) -> Option<Address> {
	let trimmed = native.trim();
	let digits = trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
		.unwrap_or(trimmed);

	if digits.len() != ADDRESS_LEN * 2 {
		return None;
	}

	let bytes = hex::decode(digits).ok()?;
	Some(Address::from_slice(&bytes))
}

fn decode_base58check(native: &str) -> Option<Address> {
	let bytes = bs58::decode(native.trim()).into_vec().ok()?;
	if bytes.len() != 1 + ADDRESS_LEN + CHECKSUM_LEN {
		return None;
	}

	let (body, checksum) = bytes.split_at(1 + ADDRESS_LEN);
	if body[0] != TRON_ADDRESS_VERSION || checksum != double_sha256_checksum(body) {
		return None;
	}

	Some(Address::from_slice(&body[1..]))
}

fn encode_base58check(address: &Address) -> String {
	let mut buf = Vec::with_capacity(1 + ADDRESS_LEN + CHECKSUM_LEN);
	buf.push(TRON_ADDRESS_VERSION);
	buf.extend_from_slice(address.as_slice());
	let checksum = double_sha256_checksum(&buf);
	buf.extend_from_slice(&checksum);
	bs58::encode(buf).into_string()
}

fn double_sha256_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
	let digest = Sha256::digest(Sha256::digest(payload));
	let mut checksum = [0u8; CHECKSUM_LEN];
	checksum.copy_from_slice(&digest[..CHECKSUM_LEN]);
	checksum
}
