//! ID3v2 tag headers
//!
//! Only the 10-byte tag header is understood, which is all that is needed to find where the
//! tag ends. Frames, text encodings, etc. are not handled.

mod header;
pub mod synchsafe;

pub use header::{Id3v2Header, tag_size, tag_size_with_options};
