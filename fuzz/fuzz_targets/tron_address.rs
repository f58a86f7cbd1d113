#![no_main]

use defi_notifier::{models::ChainFamily, services::decoder::AddressCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(text) = std::str::from_utf8(data) {
		if let Ok(address) = AddressCodec::decode(text, ChainFamily::Tron) {
			let encoded = AddressCodec::encode(&address, ChainFamily::Tron);
			assert_eq!(AddressCodec::decode(&encoded, ChainFamily::Tron), Ok(address));
		}
	}
});
