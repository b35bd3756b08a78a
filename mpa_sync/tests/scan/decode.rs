use crate::util::{V1_L3_128K, V1_L3_320K, header_bytes};
use mpa_sync::config::{ParseOptions, ParsingMode};
use mpa_sync::error::HeaderError;
use mpa_sync::mpeg::{FrameHeader, FrameLength, Layer, MpegVersion};

// Version bits
const V1: u32 = 0b11;
const V2: u32 = 0b10;
const V2_5: u32 = 0b00;

// Layer bits
const L1: u32 = 0b11;
const L2: u32 = 0b10;
const L3: u32 = 0b01;

// Bitrate indices 1 through 14
const V1_L1_BITRATES: [u32; 14] = [
	32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448,
];
const V1_L2_BITRATES: [u32; 14] = [
	32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384,
];
const V1_L3_BITRATES: [u32; 14] = [
	32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320,
];
const V2_L1_BITRATES: [u32; 14] = [
	32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256,
];
const V2_L2_L3_BITRATES: [u32; 14] = [8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160];

fn assert_bitrates(version: u32, layer: u32, expected: &[u32; 14]) {
	for (index, expected) in (1..=14).zip(expected) {
		let header = FrameHeader::decode(&header_bytes(version, layer, index, 0), 0);

		assert!(header.is_valid(), "index {index} should be valid");
		assert_eq!(
			header.bitrate, *expected,
			"version bits {version:02b}, layer bits {layer:02b}, index {index}"
		);
	}
}

#[test_log::test]
fn bitrates_v1() {
	assert_bitrates(V1, L1, &V1_L1_BITRATES);
	assert_bitrates(V1, L2, &V1_L2_BITRATES);
	assert_bitrates(V1, L3, &V1_L3_BITRATES);
}

#[test_log::test]
fn bitrates_v2() {
	assert_bitrates(V2, L1, &V2_L1_BITRATES);
	assert_bitrates(V2, L2, &V2_L2_L3_BITRATES);
	assert_bitrates(V2, L3, &V2_L2_L3_BITRATES);
}

#[test_log::test]
fn bitrates_v2_5() {
	// MPEG-2.5 shares the MPEG-2 table
	assert_bitrates(V2_5, L1, &V2_L1_BITRATES);
	assert_bitrates(V2_5, L2, &V2_L2_L3_BITRATES);
	assert_bitrates(V2_5, L3, &V2_L2_L3_BITRATES);
}

#[test_log::test]
fn bad_bitrate_index() {
	for version in [V1, V2, V2_5] {
		for layer in [L1, L2, L3] {
			let data = header_bytes(version, layer, 0b1111, 0);

			assert!(!FrameHeader::decode(&data, 0).is_valid());
			assert_eq!(
				FrameHeader::try_decode(&data, 0, ParseOptions::new()),
				Err(HeaderError::BadBitrate)
			);
		}
	}
}

#[test_log::test]
fn sample_rates() {
	let cases = [
		(V1, MpegVersion::V1, [44100, 48000, 32000]),
		(V2, MpegVersion::V2, [22050, 24000, 16000]),
		(V2_5, MpegVersion::V2_5, [11025, 12000, 8000]),
	];

	for (version_bits, version, expected) in cases {
		for (index, expected) in (0..3).zip(expected) {
			let header = FrameHeader::decode(&header_bytes(version_bits, L3, 9, index), 0);

			assert!(header.is_valid());
			assert_eq!(header.version, version);
			assert_eq!(header.sample_rate, expected);
		}

		let reserved = header_bytes(version_bits, L3, 9, 0b11);
		assert_eq!(
			FrameHeader::try_decode(&reserved, 0, ParseOptions::new()),
			Err(HeaderError::BadSampleRate)
		);
	}
}

#[test_log::test]
fn frame_sizes() {
	// 144 * 128000 / 44100
	assert_eq!(FrameHeader::decode(&V1_L3_128K, 0).frame_size, 417);
	// 144 * 320000 / 48000
	assert_eq!(FrameHeader::decode(&V1_L3_320K, 0).frame_size, 960);
	// 144 * 32000 / 32000
	assert_eq!(FrameHeader::decode(&header_bytes(V1, L3, 1, 0b10), 0).frame_size, 144);
	// 144 * 8000 / 8000
	assert_eq!(FrameHeader::decode(&header_bytes(V2_5, L3, 1, 0b10), 0).frame_size, 144);
	// 144 * 64000 / 22050
	assert_eq!(FrameHeader::decode(&header_bytes(V2, L3, 8, 0), 0).frame_size, 417);
}

#[test_log::test]
fn layers() {
	for (bits, layer) in [(L1, Layer::Layer1), (L2, Layer::Layer2), (L3, Layer::Layer3)] {
		let header = FrameHeader::decode(&header_bytes(V1, bits, 9, 0), 0);
		assert_eq!(header.layer, layer);
	}

	assert_eq!(
		FrameHeader::try_decode(&header_bytes(V1, 0b00, 9, 0), 0, ParseOptions::new()),
		Err(HeaderError::BadLayer)
	);
	assert_eq!(
		FrameHeader::try_decode(&header_bytes(0b01, L3, 9, 0), 0, ParseOptions::new()),
		Err(HeaderError::BadVersion)
	);
}

#[test_log::test]
fn samples_per_frame() {
	let cases = [
		(V1, L1, 384),
		(V1, L2, 1152),
		(V1, L3, 1152),
		(V2, L1, 384),
		(V2, L2, 1152),
		(V2, L3, 576),
		(V2_5, L3, 576),
	];

	for (version, layer, expected) in cases {
		let header = FrameHeader::decode(&header_bytes(version, layer, 9, 0), 0);
		assert_eq!(header.samples_per_frame(), expected);
	}
}

#[test_log::test]
fn free_bitrate() {
	let header = FrameHeader::decode(&header_bytes(V1, L3, 0, 0), 0);

	assert!(header.is_valid());
	assert!(header.is_free_format());
	assert_eq!(header.bitrate, 0);
	assert_eq!(header.frame_size, 0);
	assert_eq!(header.frame_len(), Some(FrameLength::FreeFormat));
	assert_eq!(header.end_offset(), None);
}

#[test_log::test]
fn every_offset() {
	// The same header at every alignment
	for junk in 0..8 {
		let mut data = vec![0x00; junk];
		data.extend(V1_L3_128K);

		let header = FrameHeader::decode(&data, junk);
		assert!(header.is_valid());
		assert_eq!(header.offset, junk);
		assert_eq!(header.end_offset(), Some(junk + 417));
	}
}

#[test_log::test]
fn offset_overflow() {
	assert_eq!(
		FrameHeader::try_decode(&V1_L3_128K, usize::MAX, ParseOptions::new()),
		Err(HeaderError::BufferExhausted)
	);
	assert_eq!(
		FrameHeader::try_decode(&V1_L3_128K, usize::MAX - 2, ParseOptions::new()),
		Err(HeaderError::BufferExhausted)
	);
}

#[test_log::test]
fn strict_reserved_emphasis() {
	let mut data = V1_L3_128K;
	data[3] |= 0b11;

	assert!(FrameHeader::decode(&data, 0).is_valid());

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	assert_eq!(
		FrameHeader::try_decode(&data, 0, strict),
		Err(HeaderError::ReservedEmphasis)
	);
	assert_eq!(FrameHeader::decode_with_options(&data, 0, strict), FrameHeader::INVALID);
}

#[test_log::test]
fn protection_bit_taken_as_is() {
	// Protection bit set, no CRC follows the header
	let header = FrameHeader::decode(&V1_L3_128K, 0);
	assert!(header.crc_enabled);
	assert_eq!(header.frame_size, 417);

	// Protection bit clear, a 16-bit CRC follows (it is never read)
	let mut data = V1_L3_128K;
	data[1] &= !0x01;

	let header = FrameHeader::decode(&data, 0);
	assert!(header.is_valid());
	assert!(!header.crc_enabled);
	assert_eq!(header.frame_size, 417);

	assert!(FrameHeader::decode(&header_bytes(V1, L3, 9, 0), 0).crc_enabled);
}
