use super::synchsafe::SynchsafeInteger;
use crate::config::{ParseOptions, ParsingMode};

use byteorder::{BigEndian, ByteOrder};

/// The size of an ID3v2 tag header (and footer)
const HEADER_SIZE: u32 = 10;

/// The header of an ID3v2 tag
///
/// Every ID3v2 tag starts with a 10-byte header:
///
/// * The sequence "ID3"
/// * A 2-byte version (major, revision)
/// * A 1-byte flags field
/// * A 4-byte synchsafe size, which excludes the header and footer
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The major version (2, 3, or 4 for any tag in the wild)
	pub major_version: u8,
	/// The revision
	pub revision: u8,
	/// The raw tag flags
	pub flags: u8,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	/// Parse the ID3v2 header at the start of `data`
	///
	/// This returns `None` if `data` doesn't start with an ID3v2 header. The version is not
	/// checked, any tag starting with "ID3" is accepted.
	///
	/// With [`ParsingMode::Strict`], a size that isn't synchsafe is rejected as well. Otherwise,
	/// the high bits of each size byte are ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::config::ParsingMode;
	/// use mpa_sync::id3::v2::Id3v2Header;
	///
	/// let data = b"ID3\x04\x00\x00\x00\x00\x02\x01";
	///
	/// let header = Id3v2Header::parse(data, ParsingMode::BestAttempt).unwrap();
	/// assert_eq!(header.major_version, 4);
	/// assert_eq!(header.size, 257);
	/// assert_eq!(header.full_tag_size(), 267);
	/// ```
	pub fn parse(data: &[u8], parsing_mode: ParsingMode) -> Option<Self> {
		let header = data.get(..HEADER_SIZE as usize)?;

		if &header[..3] != b"ID3" {
			return None;
		}

		let size = BigEndian::read_u32(&header[6..]);
		if parsing_mode == ParsingMode::Strict && !size.is_synchsafe() {
			log::debug!("ID3v2: Tag size is not synchsafe, ignoring the tag");
			return None;
		}

		Some(Self {
			major_version: header[3],
			revision: header[4],
			flags: header[5],
			size: size.unsynch(),
		})
	}

	/// Whether the tag ends with a 10-byte footer
	pub fn has_footer(&self) -> bool {
		self.flags & 0x10 == 0x10
	}

	/// The total size of the tag, including the header and footer
	pub fn full_tag_size(&self) -> u32 {
		self.size + HEADER_SIZE + if self.has_footer() { HEADER_SIZE } else { 0 }
	}
}

/// The number of bytes occupied by an ID3v2 tag at the start of `data`
///
/// Returns 0 if `data` doesn't start with an ID3v2 tag (or is shorter than 10 bytes). The
/// returned size may be larger than `data` if the tag is truncated.
///
/// NOTE: Size bytes that aren't synchsafe have their high bits dropped, rather than shifted into
///       the size. The bytes `0x00 0x00 0x82 0x81` are a size of 257 (267 with the header), not
///       `(0x82 << 7) | 0x81`. With [`ParsingMode::Strict`], such a tag is ignored entirely.
///
/// # Examples
///
/// ```rust
/// use mpa_sync::id3::v2::tag_size;
/// use mpa_sync::mpeg::first_header;
///
/// let mut data = b"ID3\x03\x00\x00\x00\x00\x00\x04".to_vec();
/// data.extend([0u8; 4]);
/// data.extend([0xFF, 0xFB, 0x90, 0x00]);
///
/// let start = tag_size(&data);
/// assert_eq!(start, 14);
///
/// let header = first_header(&data, start, data.len());
/// assert_eq!(header.offset, 14);
/// ```
pub fn tag_size(data: &[u8]) -> usize {
	tag_size_with_options(data, ParseOptions::new())
}

/// Same as [`tag_size`], using the provided [`ParseOptions`]
///
/// See [`Id3v2Header::parse`] for how the parsing mode is used.
pub fn tag_size_with_options(data: &[u8], options: ParseOptions) -> usize {
	let Some(header) = Id3v2Header::parse(data, options.parsing_mode) else {
		return 0;
	};

	let size = header.full_tag_size() as usize;
	log::debug!("ID3v2: Found a tag with a length of {size}");

	size
}
