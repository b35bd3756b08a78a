#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let _ = mpa_sync::id3::v2::tag_size(&data);
});
