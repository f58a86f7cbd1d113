//! Slack message templates for detected events.
//!
//! Messages use Slack mrkdwn: inline code for chain names and addresses, a
//! `<url|label>` link to the explorer, and custom emoji for the token logos.

use alloy::primitives::{Address, B256};

use crate::{
	models::{ChainFamily, ChainHandle, DecodedAction, EventKind},
	services::decoder::{AddressCodec, UNKNOWN_ACTION},
};

/// Builds the explorer link for a transaction
///
/// Tron explorers expect the hash without its `0x` prefix.
pub fn format_tx_url(explorer: &str, tx_hash: &B256, family: ChainFamily) -> String {
	let explorer = explorer.strip_suffix('/').unwrap_or(explorer);
	let hash = match family {
		ChainFamily::Evm => tx_hash.to_string(),
		ChainFamily::Tron => hex::encode(tx_hash.as_slice()),
	};
	format!(":clippy:<{}/{}|TxHash>", explorer, hash)
}

/// Renders the alert text for a classified event
///
/// `action` is only consulted for governance submissions.
pub fn render_alert(
	chain: &ChainHandle,
	kind: &EventKind,
	tx_hash: &B256,
	action: Option<&DecodedAction>,
) -> String {
	let link = format_tx_url(&chain.explorer, tx_hash, chain.family);
	let native = |address: &Address| AddressCodec::encode(address, chain.family);

	match kind {
		EventKind::AddressBlacklisted { subject } => format!(
			"Found `{}` - :usdtlogo: blacklisted address: `{}`, {}",
			chain.name,
			native(subject),
			link
		),
		EventKind::AddressFrozen { subject } => format!(
			"Found `{}` - :usdclogo: blacklisted address: `{}`, {}",
			chain.name,
			native(subject),
			link
		),
		EventKind::BlockPlaced { subject } => format!(
			"Found `{}` - :usdclogo: block placed on address: `{}`, {}",
			chain.name,
			native(subject),
			link
		),
		EventKind::GovernanceSubmission { transaction_id } => {
			let (destination, data, action_name) = match action {
				Some(action) => (
					native(&action.destination),
					format!("0x{}", action.payload_hex()),
					action.action,
				),
				None => (UNKNOWN_ACTION.to_string(), "0x".to_string(), UNKNOWN_ACTION),
			};

			format!(
				"Found `{}` - :usdtlogo: multi-sig submission: {}\n\
				 > TxId: `{}`\n\
				 > Destination: {}\n\
				 > Data: {}\n\
				 > Action: `{}`\n",
				chain.name, link, transaction_id, destination, data, action_name
			)
		}
	}
}
