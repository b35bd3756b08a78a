use mpa_sync::config::ParsingMode;
use mpa_sync::id3::v2::synchsafe::SynchsafeInteger;
use mpa_sync::mpeg::FrameHeader;

/// MPEG-1 Layer 3, 128 kbps, 44100 Hz, protection bit set so no CRC follows (417 bytes)
pub const V1_L3_128K: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
/// Same as [`V1_L3_128K`], with the padding bit set (418 bytes)
pub const V1_L3_128K_PADDED: [u8; 4] = [0xFF, 0xFB, 0x92, 0x00];
/// MPEG-1 Layer 3, 320 kbps, 48000 Hz, protection bit set so no CRC follows (960 bytes)
pub const V1_L3_320K: [u8; 4] = [0xFF, 0xFB, 0xE4, 0x00];
/// MPEG-1 Layer 3, free bitrate, 44100 Hz
pub const V1_L3_FREE: [u8; 4] = [0xFF, 0xFB, 0x00, 0x00];

/// Assemble a header from its version, layer, bitrate, and sample rate bits
///
/// The protection bit is set (`crc_enabled == true`), meaning no CRC follows.
pub fn header_bytes(version: u32, layer: u32, bitrate_index: u32, sample_rate_index: u32) -> [u8; 4] {
	let word = 0xFFE0_0000
		| (version << 19)
		| (layer << 17)
		| (1 << 16)
		| (bitrate_index << 12)
		| (sample_rate_index << 10);

	word.to_be_bytes()
}

/// A full frame: `header`, followed by a zeroed body up to the computed frame size
pub fn frame(header: [u8; 4]) -> Vec<u8> {
	let parsed = FrameHeader::parse(u32::from_be_bytes(header), ParsingMode::BestAttempt).unwrap();
	assert!(parsed.frame_size >= 4, "not a sized frame");

	let mut frame = header.to_vec();
	frame.resize(parsed.frame_size as usize, 0);
	frame
}

/// An ID3v2.4 tag with `size` bytes of (zeroed) content
pub fn id3v2_tag(size: u32, footer: bool) -> Vec<u8> {
	let mut tag = b"ID3\x04\x00".to_vec();
	tag.push(if footer { 0x10 } else { 0x00 });
	tag.extend(size.synch().unwrap().to_be_bytes());
	tag.resize(tag.len() + size as usize, 0);

	if footer {
		tag.extend(b"3DI\x04\x00\x10");
		tag.extend(size.synch().unwrap().to_be_bytes());
	}

	tag
}

/// The offsets of every header found walking `data` from `start`
pub fn walk(data: &[u8], start: usize) -> Vec<usize> {
	let mut offsets = Vec::new();

	let mut header = mpa_sync::mpeg::first_header(data, start, data.len());
	while header.is_valid() {
		offsets.push(header.offset);
		header = mpa_sync::mpeg::next_header(data, &header, data.len());
	}

	offsets
}
