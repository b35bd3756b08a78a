//! Contains the errors that can arise within mpa_sync
//!
//! The primary error is [`MpaError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! Note that the core decoding and scanning functions never return an [`MpaError`]. They
//! report failure as data ([`FrameHeader::INVALID`](crate::mpeg::FrameHeader::INVALID), or a tag
//! size of 0). [`HeaderError`] and [`ScanError`] are only surfaced through the `try_*` variants,
//! for callers that want to know *why* nothing was found.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, MpaError>`
pub type Result<T> = std::result::Result<T, MpaError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Attempting to read an abnormally large amount of data
	///
	/// See [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit)
	TooMuchData,
	/// A frame header could not be decoded
	Header(HeaderError),
	/// A frame sync search did not produce a header
	Scan(ScanError),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// The reasons a 4-byte window fails to decode as a frame header
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeaderError {
	/// Fewer than 4 bytes remain between the offset and the end of the buffer
	BufferExhausted,
	/// The top 11 bits are not all set
	NoFrameSync,
	/// The version bits are `01` (reserved)
	BadVersion,
	/// The layer bits are `00` (reserved)
	BadLayer,
	/// The bitrate index is `1111`
	BadBitrate,
	/// The sample rate index is `11` (reserved)
	BadSampleRate,
	/// The emphasis bits are `11` (reserved)
	///
	/// Only produced with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict).
	ReservedEmphasis,
}

impl HeaderError {
	/// Whether the bytes were there to read, but did not form a valid header
	///
	/// Everything except [`HeaderError::BufferExhausted`] is a malformed header, and a
	/// scanner simply moves one byte forward and tries again.
	pub fn is_malformed(self) -> bool {
		!matches!(self, HeaderError::BufferExhausted)
	}
}

impl Display for HeaderError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			HeaderError::BufferExhausted => write!(f, "Not enough data left to read a frame header"),
			HeaderError::NoFrameSync => write!(f, "No frame sync found"),
			HeaderError::BadVersion => write!(f, "Invalid MPEG frame version"),
			HeaderError::BadLayer => write!(f, "Invalid MPEG frame layer"),
			HeaderError::BadBitrate => write!(f, "MPEG frame has an invalid bitrate index"),
			HeaderError::BadSampleRate => write!(f, "MPEG frame has an invalid sample rate index"),
			HeaderError::ReservedEmphasis => write!(f, "MPEG frame uses a reserved emphasis"),
		}
	}
}

impl core::error::Error for HeaderError {}

/// The reasons a frame sync search ends without a header
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanError {
	/// The start offset is past the end offset, or the range can't hold a single header
	EmptyRange,
	/// Every candidate offset in the range was tried
	NotFound,
	/// The header passed to `next` was not a valid header
	InvalidPrevious,
	/// The previous frame uses a free bitrate, so its size is unknown
	///
	/// Skipping "one frame" would not advance, so the walk stops here.
	FreeFormatFrame {
		/// Offset of the free-format header
		offset: usize,
	},
}

impl Display for ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ScanError::EmptyRange => write!(f, "Search range is empty"),
			ScanError::NotFound => write!(f, "No valid frame header found in range"),
			ScanError::InvalidPrevious => write!(f, "Previous frame header is invalid"),
			ScanError::FreeFormatFrame { offset } => write!(
				f,
				"Frame at offset {offset} uses a free bitrate, its size is unknown"
			),
		}
	}
}

impl core::error::Error for ScanError {}

/// Errors that could occur within mpa_sync
pub struct MpaError {
	pub(crate) kind: ErrorKind,
}

impl MpaError {
	/// Create an `MpaError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::error::{ErrorKind, MpaError};
	///
	/// let too_much_data = MpaError::new(ErrorKind::TooMuchData);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::error::{ErrorKind, MpaError};
	///
	/// let too_much_data = MpaError::new(ErrorKind::TooMuchData);
	/// if let ErrorKind::TooMuchData = too_much_data.kind() {
	/// 	println!("What?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl core::error::Error for MpaError {}

impl From<HeaderError> for MpaError {
	fn from(input: HeaderError) -> Self {
		Self {
			kind: ErrorKind::Header(input),
		}
	}
}

impl From<ScanError> for MpaError {
	fn from(input: ScanError) -> Self {
		Self {
			kind: ErrorKind::Scan(input),
		}
	}
}

impl From<std::io::Error> for MpaError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<TryReserveError> for MpaError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Debug for MpaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl Display for MpaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
			ErrorKind::Header(ref err) => write!(f, "MPEG: {err}"),
			ErrorKind::Scan(ref err) => write!(f, "MPEG: {err}"),

			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),
		}
	}
}
