#![allow(missing_docs)]

use mpa_sync::config::{ParseOptions, ParsingMode};
use mpa_sync::id3::v2::tag_size_with_options;
use mpa_sync::mpeg::{FrameHeader, FrameScanner};

use std::thread;
use std::time::Instant;

const MODES: [ParsingMode; 3] = [
	ParsingMode::Strict,
	ParsingMode::BestAttempt,
	ParsingMode::Relaxed,
];

/// Deterministic noise, so failures can be reproduced
fn noise(len: usize, mut seed: u32) -> Vec<u8> {
	(0..len)
		.map(|_| {
			seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
			(seed >> 24) as u8
		})
		.collect()
}

/// Walk every frame in `data` with every parsing mode, checking what is found along the way
fn scan_all(data: &[u8]) {
	for mode in MODES {
		let options = ParseOptions::new().parsing_mode(mode);
		let scanner = FrameScanner::new(data).options(options);

		let start = tag_size_with_options(data, options);

		let mut last_offset = None;
		for header in scanner.frames() {
			assert!(header.is_valid());
			assert!(header.offset + 4 <= data.len());
			assert_eq!(header, FrameHeader::decode_with_options(data, header.offset, options));

			if let Some(last_offset) = last_offset {
				assert!(header.offset > last_offset, "the walk must always move forward");
			} else {
				assert!(header.offset >= start);
			}

			last_offset = Some(header.offset);
		}

		// Every offset decodes without panicking, including those past the end
		for offset in (0..data.len() + 8).step_by(61) {
			let _ = FrameHeader::decode_with_options(data, offset, options);
		}
	}
}

#[allow(clippy::missing_panics_doc)]
pub fn timeout_test(data: Vec<u8>) {
	let instant = Instant::now();
	let thread = thread::spawn(move || scan_all(&data));

	while instant.elapsed().as_secs() < 3 {
		if thread.is_finished() {
			if let Err(e) = thread.join() {
				std::panic::resume_unwind(e);
			}
			return;
		}
	}

	panic!("Failed to run test");
}

#[test_log::test]
fn empty() {
	timeout_test(Vec::new());
}

#[test_log::test]
fn shorter_than_header() {
	timeout_test(vec![0xFF, 0xFB, 0x90]);
}

#[test_log::test]
fn all_sync_bytes() {
	// Every offset starts a frame sync, none of them decode (bitrate index 15)
	timeout_test(vec![0xFF; 1024 * 1024]);
}

#[test_log::test]
fn random_noise() {
	for seed in [1, 0xDEAD_BEEF, 0x1234_5678] {
		timeout_test(noise(256 * 1024, seed));
	}
}

#[test_log::test]
fn free_format_run() {
	// Back to back free bitrate headers with nothing between them
	timeout_test([0xFF, 0xFB, 0x00, 0x00].repeat(64 * 1024));
}

#[test_log::test]
fn smallest_frames() {
	// MPEG-2.5 Layer 3, 8 kbps, 8000 Hz (144 bytes), with a header every 4 bytes
	timeout_test([0xFF, 0xE3, 0x18, 0x00].repeat(64 * 1024));
}

#[test_log::test]
fn huge_tag() {
	let mut data = b"ID3\x04\x00\x10\x7F\x7F\x7F\x7F".to_vec();
	data.extend(noise(4096, 7));
	timeout_test(data);
}
