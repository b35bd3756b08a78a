//! MPEG audio (MP1/MP2/MP3) frame headers
//!
//! ## Decoding
//!
//! [`FrameHeader::decode`] turns the 4 bytes at an offset into a [`FrameHeader`]. Nothing past
//! the header is ever read, the compressed audio is left untouched.
//!
//! ## Walking frames
//!
//! A stream is walked frame by frame with [`FrameScanner`] (or [`first_header`] and
//! [`next_header`]). Each step skips the computed frame size, and searches for the next frame
//! sync from there, byte by byte.
//!
//! ## Free bitrate frames
//!
//! The size of a free bitrate frame can't be computed from its header. Walks stop on these by
//! default, see [`FrameScanner::try_next`].
mod constants;
mod header;
mod scan;

pub use header::{
	ChannelMode, Emphasis, FrameHeader, FrameLength, HEADER_SIZE, Layer, ModeExtension,
	MpegVersion,
};
pub use scan::{FrameScanner, Frames, first_header, next_header};
