//! ID3 specific items
//!
//! ID3 tags are not read here, only measured. An ID3v2 tag at the start of a stream has to be
//! skipped before searching for the first frame, and [`v2::tag_size`] says how far.
pub mod v2;
