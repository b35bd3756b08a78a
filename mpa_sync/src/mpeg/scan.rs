use super::header::{FrameHeader, FrameLength, HEADER_SIZE};
use crate::config::ParseOptions;
use crate::error::ScanError;
use crate::id3::v2::tag_size_with_options;
use crate::macros::parse_mode_choice;

use std::iter::FusedIterator;

/// Find the first valid frame header, searching `start..=end` one byte at a time
///
/// Returns [`FrameHeader::INVALID`] if nothing was found. `end` may be anywhere past the end of
/// `data`, the search never reads out of bounds.
///
/// This is shorthand for `FrameScanner::new(data).first(start, end)`, see [`FrameScanner::first`].
///
/// # Examples
///
/// ```rust
/// use mpa_sync::mpeg::first_header;
///
/// let data = [0x00, 0x00, 0x01, 0xFF, 0xFB, 0x90, 0x00];
///
/// let header = first_header(&data, 0, data.len());
/// assert!(header.is_valid());
/// assert_eq!(header.offset, 3);
/// ```
pub fn first_header(data: &[u8], start: usize, end: usize) -> FrameHeader {
	FrameScanner::new(data).first(start, end)
}

/// Find the header following `previous`, searching up to `end`
///
/// This is shorthand for `FrameScanner::new(data).next(previous, end)`, see [`FrameScanner::next`].
pub fn next_header(data: &[u8], previous: &FrameHeader, end: usize) -> FrameHeader {
	FrameScanner::new(data).next(previous, end)
}

/// Searches a buffer for MPEG audio frame headers
///
/// The scanner only borrows the buffer, and holds no state of its own. It is `Copy`, and any
/// number of scans (on any number of threads) can share the same buffer.
///
/// # Examples
///
/// ```rust
/// use mpa_sync::mpeg::FrameScanner;
///
/// let data = [0xFF_u8, 0xFB, 0x90, 0x00].repeat(2);
/// let scanner = FrameScanner::new(&data);
///
/// for header in scanner.frames() {
/// 	println!("{:08x}: {} kbps", header.offset, header.bitrate);
/// }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct FrameScanner<'a> {
	data: &'a [u8],
	options: ParseOptions,
}

impl<'a> FrameScanner<'a> {
	/// Create a new `FrameScanner` over `data`, using the default [`ParseOptions`]
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			options: ParseOptions::new(),
		}
	}

	/// Set the [`ParseOptions`] to use for decoding and searching
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::config::{ParseOptions, ParsingMode};
	/// use mpa_sync::mpeg::FrameScanner;
	///
	/// let data = [0u8; 16];
	/// let scanner =
	/// 	FrameScanner::new(&data).options(ParseOptions::new().parsing_mode(ParsingMode::Strict));
	/// ```
	#[must_use]
	pub fn options(mut self, options: ParseOptions) -> Self {
		self.options = options;
		self
	}

	/// The buffer being scanned
	pub fn data(&self) -> &'a [u8] {
		self.data
	}

	/// Find the first valid frame header, searching `start..=end` one byte at a time
	///
	/// Frame syncs aren't aligned to anything, so every offset is a candidate. The search also
	/// stops early after [`ParseOptions::max_junk_bytes`].
	///
	/// Returns [`FrameHeader::INVALID`] if:
	///
	/// * `start > end`
	/// * There aren't 4 bytes to read in the range
	/// * No offset in the range holds a valid header
	pub fn first(&self, start: usize, end: usize) -> FrameHeader {
		self.try_first(start, end).unwrap_or(FrameHeader::INVALID)
	}

	/// Same as [`FrameScanner::first`], reporting why nothing was found
	///
	/// # Errors
	///
	/// * [`ScanError::EmptyRange`] if `start > end`, or no header fits in the range
	/// * [`ScanError::NotFound`] if every candidate offset was rejected
	pub fn try_first(&self, start: usize, end: usize) -> Result<FrameHeader, ScanError> {
		if start > end {
			return Err(ScanError::EmptyRange);
		}

		// The last offset a header can start at
		let Some(last_offset) = self.data.len().checked_sub(HEADER_SIZE) else {
			return Err(ScanError::EmptyRange);
		};

		let mut end = end.min(last_offset);
		if let Some(max_junk_bytes) = self.options.max_junk_bytes {
			end = end.min(start.saturating_add(max_junk_bytes));
		}

		if start > end {
			return Err(ScanError::EmptyRange);
		}

		for offset in start..=end {
			// Not even the first 8 sync bits, skip the full decode
			if self.data[offset] != 0xFF {
				continue;
			}

			let Ok(header) = FrameHeader::try_decode(self.data, offset, self.options) else {
				continue;
			};

			if offset > start {
				log::debug!(
					"MPEG: Skipped {} junk bytes before the frame at {offset}",
					offset - start
				);
			} else {
				log::debug!("MPEG: Found a frame at {offset}");
			}

			return Ok(header);
		}

		log::debug!("MPEG: No frame header found between {start} and {end}");
		Err(ScanError::NotFound)
	}

	/// Find the header following `previous`, searching up to `end`
	///
	/// This skips exactly `previous.frame_size` bytes from `previous.offset`, and resumes the
	/// search there. The frame sync is always checked again, the computed frame size is never
	/// trusted on its own.
	///
	/// Returns [`FrameHeader::INVALID`] if `previous` is invalid, if nothing follows it, or if
	/// `previous` is a free bitrate frame (see [`FrameScanner::try_next`]).
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::mpeg::FrameScanner;
	///
	/// // Two 417 byte frames
	/// let mut data = [0xFF_u8, 0xFB, 0x90, 0x00].to_vec();
	/// data.resize(417, 0);
	/// data.extend([0xFF, 0xFB, 0x90, 0x00]);
	/// data.resize(834, 0);
	///
	/// let scanner = FrameScanner::new(&data);
	///
	/// let first = scanner.first(0, data.len());
	/// let second = scanner.next(&first, data.len());
	/// assert_eq!(second.offset, 417);
	///
	/// let third = scanner.next(&second, data.len());
	/// assert!(!third.is_valid());
	/// ```
	pub fn next(&self, previous: &FrameHeader, end: usize) -> FrameHeader {
		self.try_next(previous, end)
			.unwrap_or(FrameHeader::INVALID)
	}

	/// Same as [`FrameScanner::next`], reporting why nothing was found
	///
	/// A free bitrate frame has no known size, so the frame can't be skipped. By default this
	/// stops the search. With [`ParsingMode::Relaxed`](crate::config::ParsingMode::Relaxed), the
	/// search resumes directly after the previous header instead.
	///
	/// # Errors
	///
	/// * [`ScanError::InvalidPrevious`] if `previous` is not a valid header
	/// * [`ScanError::FreeFormatFrame`] if `previous` has a free bitrate
	/// * See [`FrameScanner::try_first`]
	pub fn try_next(&self, previous: &FrameHeader, end: usize) -> Result<FrameHeader, ScanError> {
		let parsing_mode = self.options.parsing_mode;

		let start = match previous.frame_len() {
			Some(FrameLength::Bytes(len)) => previous.offset.saturating_add(len as usize),
			Some(FrameLength::FreeFormat) => parse_mode_choice!(
				parsing_mode,
				RELAXED: {
					log::debug!(
						"MPEG: Frame at {} uses a free bitrate, searching past its header",
						previous.offset
					);
					previous.offset.saturating_add(HEADER_SIZE)
				},
				DEFAULT: {
					log::warn!(
						"MPEG: Frame at {} uses a free bitrate, unable to skip it",
						previous.offset
					);
					return Err(ScanError::FreeFormatFrame {
						offset: previous.offset,
					});
				},
			),
			None => return Err(ScanError::InvalidPrevious),
		};

		self.try_first(start, end)
	}

	/// Iterate over every frame header in the buffer
	///
	/// The search starts after any leading ID3v2 tag, and ends at the first frame that can't
	/// be followed. See [`Frames::stop_reason`].
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::mpeg::FrameScanner;
	///
	/// // An empty ID3v2 tag, followed by a single 417 byte frame
	/// let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
	/// data.extend([0xFF, 0xFB, 0x90, 0x00]);
	/// data.resize(427, 0);
	///
	/// let headers = FrameScanner::new(&data).frames().collect::<Vec<_>>();
	/// assert_eq!(headers.len(), 1);
	/// assert_eq!(headers[0].offset, 10);
	/// ```
	pub fn frames(&self) -> Frames<'a> {
		self.frames_from(tag_size_with_options(self.data, self.options))
	}

	/// Iterate over every frame header, starting the search at `start`
	pub fn frames_from(&self, start: usize) -> Frames<'a> {
		Frames {
			scanner: *self,
			start,
			previous: None,
			stop_reason: None,
		}
	}
}

/// An iterator over the frame headers in a buffer
///
/// Created with [`FrameScanner::frames`] or [`FrameScanner::frames_from`].
#[derive(Clone, Debug)]
pub struct Frames<'a> {
	scanner: FrameScanner<'a>,
	start: usize,
	previous: Option<FrameHeader>,
	stop_reason: Option<ScanError>,
}

impl Frames<'_> {
	/// Why the iterator stopped, `None` if it hasn't yet
	pub fn stop_reason(&self) -> Option<ScanError> {
		self.stop_reason
	}
}

impl Iterator for Frames<'_> {
	type Item = FrameHeader;

	fn next(&mut self) -> Option<Self::Item> {
		if self.stop_reason.is_some() {
			return None;
		}

		let end = self.scanner.data.len();
		let result = match self.previous {
			Some(ref previous) => self.scanner.try_next(previous, end),
			None => self.scanner.try_first(self.start, end),
		};

		match result {
			Ok(header) => {
				self.previous = Some(header);
				Some(header)
			},
			Err(e) => {
				self.stop_reason = Some(e);
				None
			},
		}
	}
}

impl FusedIterator for Frames<'_> {}
