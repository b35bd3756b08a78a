#![no_main]

use libfuzzer_sys::fuzz_target;
use mpa_sync::config::ParseOptions;
use mpa_sync::mpeg::FrameHeader;

fuzz_target!(|data: Vec<u8>| {
	for offset in 0..data.len() {
		let header = FrameHeader::decode_with_options(&data, offset, ParseOptions::new());
		if header.is_valid() {
			assert_eq!(header.offset, offset);
		}
	}
});
