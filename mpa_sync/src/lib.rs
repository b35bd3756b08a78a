//! Locate and decode MPEG audio (MP1/MP2/MP3) frame headers.
//!
//! An MPEG audio stream is a sequence of frames, each starting with a 4-byte header. There is no
//! index, so the only way to find a frame is to search for its sync pattern. `mpa_sync` does the
//! search, decodes the headers it finds, and steps from one frame to the next using the frame
//! size computed from each header.
//!
//! Only headers are read. The compressed audio itself is never touched.
//!
//! # Examples
//!
//! ## Walking a file
//!
//! ```rust,no_run
//! # fn main() -> mpa_sync::error::Result<()> {
//! use mpa_sync::id3::v2::tag_size;
//! use mpa_sync::mpeg::{first_header, next_header};
//!
//! let data = mpa_sync::io::read_from_path("test.mp3")?;
//!
//! // Skip the ID3v2 tag, if there is one
//! let start = tag_size(&data);
//!
//! let mut header = first_header(&data, start, data.len());
//! while header.is_valid() {
//! 	println!(
//! 		"{:08x}: {} kbps, {} Hz",
//! 		header.offset, header.bitrate, header.sample_rate
//! 	);
//!
//! 	header = next_header(&data, &header, data.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using a scanner
//!
//! [`FrameScanner`](mpeg::FrameScanner) does the same, and allows for
//! [`ParseOptions`](config::ParseOptions) to be set.
//!
//! ```rust
//! use mpa_sync::config::{ParseOptions, ParsingMode};
//! use mpa_sync::mpeg::FrameScanner;
//!
//! // Two 417 byte frames, with some junk in front
//! let mut data = vec![0x00, 0x00];
//! for _ in 0..2 {
//! 	let start = data.len();
//! 	data.extend([0xFF, 0xFB, 0x90, 0x00]);
//! 	data.resize(start + 417, 0);
//! }
//!
//! let scanner =
//! 	FrameScanner::new(&data).options(ParseOptions::new().parsing_mode(ParsingMode::Strict));
//!
//! let offsets = scanner
//! 	.frames()
//! 	.map(|header| header.offset)
//! 	.collect::<Vec<_>>();
//! assert_eq!(offsets, [2, 419]);
//! ```
//!
//! # Decoding failures
//!
//! Decoding and searching never panic, and never read out of bounds. Failure is reported as
//! data: an invalid header is [`FrameHeader::INVALID`](mpeg::FrameHeader::INVALID), which has
//! every field zeroed. The `try_*` variants report *why* a header was rejected, see
//! [`error`].
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub(crate) mod macros;
mod util;

pub mod id3;
pub mod mpeg;

pub use util::io;
