//! Loading streams into memory
//!
//! Frame headers are found in a fully loaded buffer. These functions either load the entire
//! stream, or fail, a partially loaded buffer is never returned.

use crate::config::global_options;
use crate::error::Result;
use crate::macros::err;
use crate::util::alloc::VecFallibleCapacity;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the entire file at `path` into memory
///
/// # Errors
///
/// * `path` does not exist, or can't be read
/// * The file is larger than [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit)
/// * The allocation fails
///
/// # Examples
///
/// ```rust,no_run
/// use mpa_sync::id3::v2::tag_size;
/// use mpa_sync::mpeg::first_header;
///
/// # fn main() -> mpa_sync::error::Result<()> {
/// let data = mpa_sync::io::read_from_path("test.mp3")?;
///
/// let header = first_header(&data, tag_size(&data), data.len());
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P) -> Result<Vec<u8>>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	log::debug!("Loading {}", path.display());

	let mut file = File::open(path)?;

	let Ok(len) = usize::try_from(file.metadata()?.len()) else {
		err!(TooMuchData);
	};

	let mut content = Vec::try_with_capacity_stable(len)?;
	read_to_end_limited(&mut file, &mut content)?;

	Ok(content)
}

/// Read the remainder of `reader` into memory
///
/// # Errors
///
/// * `reader` fails to read
/// * More than [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit) bytes are read
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// # fn main() -> mpa_sync::error::Result<()> {
/// let mut reader = Cursor::new([0xFF_u8, 0xFB, 0x90, 0x00]);
///
/// let data = mpa_sync::io::read_from(&mut reader)?;
/// assert_eq!(data, [0xFF, 0xFB, 0x90, 0x00]);
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R) -> Result<Vec<u8>>
where
	R: Read,
{
	let mut content = Vec::new();
	read_to_end_limited(reader, &mut content)?;

	Ok(content)
}

fn read_to_end_limited<R>(reader: &mut R, content: &mut Vec<u8>) -> Result<()>
where
	R: Read,
{
	let limit = global_options().allocation_limit;

	// One byte past the limit, to tell "exactly at the limit" apart from "over it"
	let read = reader
		.take((limit as u64).saturating_add(1))
		.read_to_end(content)?;

	if read > limit {
		log::debug!("Stream is larger than the allocation limit ({limit} bytes)");
		err!(TooMuchData);
	}

	Ok(())
}
