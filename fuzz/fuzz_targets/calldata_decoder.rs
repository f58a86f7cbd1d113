#![no_main]

use defi_notifier::services::decoder::{CalldataDecoder, SUBMISSION_HEADER_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	match CalldataDecoder::decode(data) {
		Ok(action) => assert_eq!(action.payload.len(), data.len() - SUBMISSION_HEADER_LEN),
		Err(_) => assert!(data.len() < SUBMISSION_HEADER_LEN),
	}
});
