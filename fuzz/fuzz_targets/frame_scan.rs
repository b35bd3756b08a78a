#![no_main]

use libfuzzer_sys::fuzz_target;
use mpa_sync::config::{ParseOptions, ParsingMode};
use mpa_sync::mpeg::FrameScanner;

fuzz_target!(|data: Vec<u8>| {
	let options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
	for _ in FrameScanner::new(&data).options(options).frames() {}
});
