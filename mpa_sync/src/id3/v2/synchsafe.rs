//! Utilities for working with synchsafe integers
//!
//! ID3v2 stores sizes as "synchsafe" integers, where the most significant bit of each byte is
//! always 0. This keeps a size from ever looking like the start of a frame sync (`0xFF 0xE0`).
//! A 4-byte synchsafe integer holds 28 bits.

use crate::error::Result;
use crate::macros::err;

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in <`INTEGER_TYPE::BITS - size_of::<INTEGER_TYPE>()`> bits
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::id3::v2::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> mpa_sync::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// Any set high bits are discarded.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::id3::v2::synchsafe::SynchsafeInteger;
	///
	/// // The size bytes `0x00 0x00 0x02 0x01` of an ID3v2 header
	/// let size = 0x0000_0201_u32.unsynch();
	/// assert_eq!(size, 257);
	/// ```
	fn unsynch(self) -> Self;

	/// Whether every byte has its most significant bit unset
	fn is_synchsafe(self) -> bool;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		// 7 bits are available per byte, shave off 1 bit per byte
		const MAXIMUM_INTEGER: u32 = u32::MAX >> 4;

		if self > MAXIMUM_INTEGER {
			err!(TooMuchData);
		}

		let n = self;
		Ok((n & 0x7F)
			| ((n & (0x7F << 7)) << 1)
			| ((n & (0x7F << 14)) << 2)
			| ((n & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}

	fn is_synchsafe(self) -> bool {
		self & 0x8080_8080 == 0
	}
}
